//! Primary navigation bar, rendered on every page.

use std::fmt::Write;

use esdocs_catalog::VersionEntry;

use super::{escape, version_href};

/// Version id highlighted for `path`: its second segment, or `""`.
#[must_use]
pub(crate) fn current_version(path: &str) -> &str {
    path.split('/').nth(2).unwrap_or("")
}

/// Render the navbar with one link per navigation entry.
///
/// Wide viewports get a link list; narrow ones a `<select>` that the client
/// script turns into a full navigation on change.
pub(crate) fn render_navbar(html: &mut String, brand: &str, entries: &[VersionEntry], path: &str) {
    let active = current_version(path);

    html.push_str("<nav class=\"navbar\">\n<div class=\"navbar-inner\">\n");
    let _ = writeln!(html, "<a href=\"/\" class=\"navbar-brand\">{}</a>", escape(brand));

    html.push_str("<div class=\"navbar-links\">\n");
    for entry in entries {
        let is_active = !active.is_empty() && entry.id == active;
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"navbar-link{}\"{}>{}</a>",
            escape(&version_href(&entry.id)),
            if is_active { " active" } else { "" },
            if is_active { " aria-current=\"page\"" } else { "" },
            escape(&entry.name),
        );
    }
    html.push_str("</div>\n");

    if !entries.is_empty() {
        html.push_str(
            "<select class=\"navbar-select\" data-version-select aria-label=\"Select version\">\n",
        );
        if !entries.iter().any(|e| e.id == active) {
            html.push_str("<option value=\"\" selected disabled>Select version</option>\n");
        }
        for entry in entries {
            let _ = writeln!(
                html,
                "<option value=\"{}\"{}>{}</option>",
                escape(&version_href(&entry.id)),
                if entry.id == active { " selected" } else { "" },
                escape(&entry.name),
            );
        }
        html.push_str("</select>\n");
    }

    html.push_str("</div>\n</nav>\n");
}
