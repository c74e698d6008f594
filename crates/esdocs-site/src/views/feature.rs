//! Feature section: heading, body or placeholder, back-to-top link.

use std::fmt::Write;

use esdocs_catalog::{FeatureContent, FeatureEntry};

use super::escape;

const BACK_TO_TOP_ICON: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"icon\" \
    viewBox=\"0 0 20 20\" fill=\"currentColor\" aria-hidden=\"true\">\
    <path fill-rule=\"evenodd\" d=\"M14.707 12.707a1 1 0 01-1.414 0L10 9.414l-3.293 3.293a1 1 0 \
    01-1.414-1.414l4-4a1 1 0 011.414 0l4 4a1 1 0 010 1.414z\" clip-rule=\"evenodd\"/></svg>";

/// Render one feature as a `<section>` whose id is the feature id.
///
/// Rendered content is produced exactly once per call.
pub(crate) fn render_feature_section(html: &mut String, feature: &FeatureEntry) {
    let _ = writeln!(
        html,
        "<section id=\"{}\" class=\"feature\">",
        escape(&feature.id)
    );
    html.push_str("<div class=\"feature-inner\">\n<div class=\"feature-main\">\n");
    let _ = writeln!(html, "<h2 class=\"feature-title\">{}</h2>", escape(&feature.title));

    html.push_str("<div class=\"feature-body\">\n");
    match &feature.content {
        FeatureContent::Rendered(body) => {
            html.push_str("<div class=\"prose\">\n");
            html.push_str(body.render().as_str());
            html.push_str("\n</div>\n");
        }
        FeatureContent::Pending => {
            html.push_str("<div class=\"placeholder\">\n<div class=\"placeholder-icon\">📝</div>\n");
            let _ = writeln!(
                html,
                "<p>Content area for: <span class=\"placeholder-title\">{}</span></p>",
                escape(&feature.title)
            );
            html.push_str("<p class=\"placeholder-hint\">You can add your documentation here</p>\n");
            html.push_str("</div>\n");
        }
    }
    html.push_str("</div>\n</div>\n");

    let _ = writeln!(
        html,
        "<a href=\"#\" class=\"back-to-top\" data-back-to-top title=\"Back to top\">{BACK_TO_TOP_ICON}</a>"
    );
    html.push_str("</div>\n</section>\n");
}
