//! Per-version sidebar with in-page feature links.

use std::fmt::Write;

use esdocs_catalog::Catalog;

use super::{FALLBACK_TITLE, escape, fragment_href};

/// Render the sidebar for `version_id`.
///
/// Unknown versions get the fallback heading and no links.
pub(crate) fn render_sidebar(html: &mut String, catalog: &Catalog, version_id: &str) {
    let heading = catalog
        .version(version_id)
        .map_or(FALLBACK_TITLE, |record| record.name.as_str());

    html.push_str("<aside class=\"sidebar\">\n<div class=\"sidebar-inner\">\n");
    let _ = writeln!(html, "<h2 class=\"sidebar-title\">{}</h2>", escape(heading));
    html.push_str("<nav class=\"sidebar-nav\">\n");
    for feature in catalog.features(version_id) {
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"sidebar-link\">{}</a>",
            escape(&fragment_href(&feature.id)),
            escape(&feature.title),
        );
    }
    html.push_str("<div class=\"sidebar-footer\">\n");
    html.push_str("<a href=\"#\" class=\"sidebar-link\" data-back-to-top>↑ Back to Top</a>\n");
    html.push_str("</div>\n</nav>\n</div>\n</aside>\n");
}
