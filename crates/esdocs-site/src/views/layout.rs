//! Document shell shared by every page.

use std::fmt::Write;

use esdocs_catalog::Catalog;

use super::{escape, render_navbar};
use crate::site::SiteOptions;

/// Per-page values for the document shell.
pub(crate) struct PageShell<'a> {
    pub title: &'a str,
    /// Request path, used to highlight the active navbar link.
    pub path: &'a str,
    /// Ask the client script to scroll to the top on load.
    pub scroll_reset: bool,
    /// Inline script run before the body is parsed.
    pub head_script: Option<&'a str>,
}

/// Wrap `body` in the full HTML document with head, navbar and scripts.
pub(crate) fn render_document(
    options: &SiteOptions,
    catalog: &Catalog,
    shell: &PageShell<'_>,
    body: &str,
) -> String {
    let mut html = String::with_capacity(body.len() + 4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(shell.title));
    let _ = writeln!(
        html,
        "<link rel=\"stylesheet\" href=\"{}/styles.css\">",
        escape(&options.asset_base)
    );
    let _ = writeln!(
        html,
        "<script src=\"{}/app.js\" defer></script>",
        escape(&options.asset_base)
    );
    if let Some(url) = &options.playground_script {
        let _ = writeln!(html, "<script src=\"{}\" defer></script>", escape(url));
    }
    if let Some(script) = shell.head_script {
        let _ = writeln!(html, "<script>{script}</script>");
    }
    html.push_str("</head>\n");

    if shell.scroll_reset {
        html.push_str("<body data-scroll-reset=\"top\">\n");
    } else {
        html.push_str("<body>\n");
    }
    html.push_str("<div class=\"app\">\n");
    render_navbar(&mut html, &options.title, catalog.navigation(), shell.path);
    html.push_str(body);
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Sends every path except `/es/{id}` to `/`, replacing the history entry.
const NOT_FOUND_SCRIPT: &str =
    r#"if (!/^\/es\/[^\/]+\/?$/.test(location.pathname)) location.replace("/");"#;

/// Page for paths with no file of their own, such as the `404.html` of a
/// static export.
///
/// Version paths keep the fallback shell (`body`); any other path is
/// replaced with `/` by [`NOT_FOUND_SCRIPT`].
pub(crate) fn render_not_found(
    options: &SiteOptions,
    catalog: &Catalog,
    title: &str,
    body: &str,
) -> String {
    let shell = PageShell {
        title,
        path: "",
        scroll_reset: true,
        head_script: Some(NOT_FOUND_SCRIPT),
    };
    let body = format!(
        "<noscript><p class=\"redirect\"><a href=\"/\">Go to the home page</a></p></noscript>\n{body}"
    );
    render_document(options, catalog, &shell, &body)
}
