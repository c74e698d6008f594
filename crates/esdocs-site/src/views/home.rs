//! Home page: intro, version cards, footer.

use std::fmt::Write;

use esdocs_catalog::VersionEntry;

use super::{escape, version_href};
use crate::site::SiteOptions;

const ARROW_ICON: &str = "<svg class=\"icon\" fill=\"currentColor\" viewBox=\"0 0 20 20\" \
    aria-hidden=\"true\"><path fill-rule=\"evenodd\" d=\"M10.293 5.293a1 1 0 011.414 0l4 4a1 1 0 \
    010 1.414l-4 4a1 1 0 01-1.414-1.414L12.586 11H5a1 1 0 110-2h7.586l-2.293-2.293a1 1 0 \
    010-1.414z\" clip-rule=\"evenodd\"/></svg>";

/// Card badge text: the id without its two-letter `es` prefix.
fn badge(id: &str) -> String {
    id.chars().skip(2).collect()
}

/// Render the home page body with one card per navigation entry.
pub(crate) fn render_home(options: &SiteOptions, entries: &[VersionEntry]) -> String {
    let mut html = String::with_capacity(8192);
    html.push_str("<main class=\"home\">\n<div class=\"home-inner\">\n");

    html.push_str("<header class=\"home-header\">\n");
    html.push_str("<h1>JavaScript ES Documentation</h1>\n");
    let _ = writeln!(
        html,
        "<p class=\"intro\">Hi, I'm {}. This is a personal documentation project where I \
         explore and summarize modern JavaScript features, from ES6 to the latest proposals \
         and beyond. I built this to deepen my understanding and stay up-to-date with the \
         evolving JavaScript ecosystem.</p>",
        escape(&options.author)
    );
    html.push_str("</header>\n");

    html.push_str("<div class=\"version-grid\">\n");
    for entry in entries {
        let name = escape(&entry.name);
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"version-card\">",
            escape(&version_href(&entry.id))
        );
        html.push_str("<div class=\"version-card-body\">\n");
        let _ = writeln!(html, "<div class=\"badge\">{}</div>", escape(&badge(&entry.id)));
        let _ = writeln!(html, "<h3>{name}</h3>");
        let _ = writeln!(html, "<p>Features introduced in {name}</p>");
        let _ = writeln!(
            html,
            "<div class=\"card-action\"><span>View Documentation</span>{ARROW_ICON}</div>"
        );
        html.push_str("</div>\n</a>\n");
    }
    html.push_str("</div>\n");

    render_footer(&mut html, options);
    html.push_str("</div>\n</main>\n");
    html
}

fn render_footer(html: &mut String, options: &SiteOptions) {
    let author = escape(&options.author);
    html.push_str("<footer class=\"footer\">\n");
    let _ = writeln!(html, "<p class=\"footer-author\">Built by {author}</p>");
    html.push_str(
        "<p class=\"footer-tagline\">Always learning, always building, focused on modern \
         JavaScript and web development.</p>\n",
    );
    let _ = writeln!(
        html,
        "<p class=\"footer-copyright\">© <span data-current-year>{}</span> {author}. All rights reserved.</p>",
        options.copyright_year
    );
    html.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> SiteOptions {
        SiteOptions {
            copyright_year: 2025,
            ..SiteOptions::default()
        }
    }

    #[test]
    fn test_badge_strips_prefix() {
        assert_eq!(badge("es2015"), "2015");
        assert_eq!(badge("e"), "");
        assert_eq!(badge("ésx"), "x");
    }

    #[test]
    fn test_cards_in_order() {
        let entries = vec![
            VersionEntry::new("es2015", "ES2015 (ES6)"),
            VersionEntry::new("es2016", "ES2016 (ES7)"),
        ];
        let html = render_home(&options(), &entries);
        assert_eq!(html.matches("class=\"version-card\"").count(), 2);
        let first = html.find("href=\"/es/es2015\"").unwrap();
        let second = html.find("href=\"/es/es2016\"").unwrap();
        assert!(first < second);
        assert!(html.contains("<div class=\"badge\">2015</div>"));
        assert!(html.contains("<p>Features introduced in ES2015 (ES6)</p>"));
        assert!(html.contains("View Documentation"));
    }

    #[test]
    fn test_empty_navigation_has_no_cards() {
        let html = render_home(&options(), &[]);
        assert_eq!(html.matches("class=\"version-card\"").count(), 0);
        assert!(html.contains("JavaScript ES Documentation"));
    }

    #[test]
    fn test_footer() {
        let html = render_home(&options(), &[]);
        assert!(html.contains("Built by Achmad Farid"));
        assert!(html.contains("<span data-current-year>2025</span> Achmad Farid"));
    }
}
