//! Version page body.

use std::fmt::Write;

use esdocs_catalog::Catalog;

use super::{FALLBACK_TITLE, escape, render_feature_section, render_sidebar};

const SUBTITLE: &str = "Documentation for JavaScript features introduced in this version";

/// Render the version page body and return it with the page heading.
///
/// An unknown id renders the fallback heading and no feature sections.
pub(crate) fn render_version(catalog: &Catalog, version_id: &str) -> (String, String) {
    let title = catalog
        .version(version_id)
        .map_or(FALLBACK_TITLE, |record| record.name.as_str())
        .to_owned();

    let mut html = String::with_capacity(16384);
    html.push_str("<div class=\"version-layout\">\n");
    render_sidebar(&mut html, catalog, version_id);

    html.push_str("<main class=\"version-main\">\n<div class=\"version-content\">\n");
    html.push_str("<header class=\"version-header\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&title));
    let _ = writeln!(html, "<p class=\"subtitle\">{SUBTITLE}</p>");
    html.push_str("</header>\n");

    html.push_str("<div class=\"feature-list\">\n");
    for feature in catalog.features(version_id) {
        render_feature_section(&mut html, feature);
    }
    html.push_str("</div>\n</div>\n</main>\n</div>\n");

    (title, html)
}
