//! Page assembly over an injected catalog.

use std::sync::Arc;

use chrono::Datelike;
use esdocs_catalog::Catalog;

use crate::router::{HistoryMode, Navigation, Route, ScrollAction};
use crate::views::{self, PageShell, version_href};

/// Site-wide presentation settings.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Navbar brand and home page title.
    pub title: String,
    /// Author named in the intro and footer.
    pub author: String,
    pub copyright_year: i32,
    /// Playground adapter script loaded on every page; it mounts the
    /// `.live-playground` blocks through the hooks in `app.js`.
    pub playground_script: Option<String>,
    /// URL prefix of stylesheet and client script.
    pub asset_base: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "AF JS DOCS".to_owned(),
            author: "Achmad Farid".to_owned(),
            copyright_year: chrono::Local::now().year(),
            playground_script: None,
            asset_base: "/assets".to_owned(),
        }
    }
}

/// Result of rendering a request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedPage {
    Html(String),
    /// Path does not name a page; replace the location with `to`.
    Redirect { to: String },
}

/// Renders site pages from a shared catalog.
///
/// Rendering is synchronous and read-only, so one `Site` can serve
/// concurrent requests.
#[derive(Clone, Debug)]
pub struct Site {
    catalog: Arc<Catalog>,
    options: SiteOptions,
}

impl Site {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, options: SiteOptions) -> Self {
        Self { catalog, options }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Resolve `path` and render the selected page.
    ///
    /// The page's scroll behavior comes from [`Navigation::for_path`], so the
    /// served HTML follows the same rules as [`Navigator`](crate::Navigator).
    #[must_use]
    pub fn render_path(&self, path: &str) -> RenderedPage {
        let nav = Navigation::for_path(path);
        let scroll_reset = nav.scroll == ScrollAction::ResetToTop;
        match nav.route {
            Route::Home => RenderedPage::Html(self.home_page(scroll_reset)),
            Route::Version { version_id } => {
                RenderedPage::Html(self.version_page(&version_id, scroll_reset))
            }
            Route::Redirect { to } => {
                debug_assert_eq!(nav.history, HistoryMode::Replace);
                RenderedPage::Redirect { to }
            }
        }
    }

    #[must_use]
    pub fn render_home(&self) -> String {
        self.home_page(false)
    }

    /// Render the page of `version_id`; unknown ids get the fallback shell.
    #[must_use]
    pub fn render_version(&self, version_id: &str) -> String {
        self.version_page(version_id, true)
    }

    /// Page served for paths without a file of their own.
    ///
    /// `/es/{id}` paths show the fallback shell, as the server does for
    /// unknown ids; every other path is replaced with `/` on load.
    #[must_use]
    pub fn render_not_found(&self) -> String {
        // Empty ids fail validation, so this is always the fallback shell.
        let (heading, body) = views::render_version(&self.catalog, "");
        let title = format!("{heading} | {}", self.options.title);
        views::render_not_found(&self.options, &self.catalog, &title, &body)
    }

    fn home_page(&self, scroll_reset: bool) -> String {
        let body = views::render_home(&self.options, self.catalog.navigation());
        let shell = PageShell {
            title: &self.options.title,
            path: "/",
            scroll_reset,
            head_script: None,
        };
        views::render_document(&self.options, &self.catalog, &shell, &body)
    }

    fn version_page(&self, version_id: &str, scroll_reset: bool) -> String {
        if self.catalog.version(version_id).is_none() {
            tracing::warn!(version_id, "Unknown version id");
        }
        let (heading, body) = views::render_version(&self.catalog, version_id);
        let title = format!("{heading} | {}", self.options.title);
        let path = version_href(version_id);
        let shell = PageShell {
            title: &title,
            path: &path,
            scroll_reset,
            head_script: None,
        };
        views::render_document(&self.options, &self.catalog, &shell, &body)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn site() -> Site {
        let catalog = Catalog::bundled().unwrap();
        Site::new(Arc::new(catalog), SiteOptions::default())
    }

    fn html(page: RenderedPage) -> String {
        match page {
            RenderedPage::Html(html) => html,
            RenderedPage::Redirect { to } => panic!("unexpected redirect to {to}"),
        }
    }

    #[test]
    fn test_home_lists_every_version() {
        let html = html(site().render_path("/"));
        assert_eq!(html.matches("class=\"version-card\"").count(), 10);
        assert!(html.contains("<title>AF JS DOCS</title>"));
        assert!(!html.contains("data-scroll-reset"));
    }

    #[test]
    fn test_es2015_page() {
        let html = html(site().render_path("/es/es2015"));
        assert!(html.contains("<h1>ES6 / ES2015 (Modern JS Revolution)</h1>"));
        assert!(html.contains("<title>ES6 / ES2015 (Modern JS Revolution) | AF JS DOCS</title>"));
        assert_eq!(html.matches("<section ").count(), 14);
        assert!(html.contains("data-scroll-reset=\"top\""));
        assert!(html.contains("aria-current=\"page\">ES2015 (ES6)</a>"));
        assert!(html.contains("href=\"#destructuring%20array\""));
        assert!(html.contains("live-playground"));
    }

    #[test]
    fn test_pending_version_page() {
        let html = html(site().render_path("/es/es2024"));
        assert_eq!(html.matches("<section ").count(), 4);
        assert_eq!(html.matches("Content area for:").count(), 4);
    }

    #[test]
    fn test_unknown_version_renders_fallback_shell() {
        let html = html(site().render_path("/es/doesnotexist"));
        assert!(html.contains("<h1>JavaScript Features</h1>"));
        assert_eq!(html.matches("<section ").count(), 0);
        assert!(html.contains("<nav class=\"navbar\""));
    }

    #[test]
    fn test_unmatched_path_redirects() {
        assert_eq!(
            site().render_path("/random/garbage"),
            RenderedPage::Redirect { to: "/".to_owned() }
        );
    }

    #[test]
    fn test_arbitrary_version_ids_do_not_panic() {
        let site = site();
        for id in ["", " ", "<script>", "\"", "%", "😀", "es2015/../x", "\u{0}", "a#b?c"] {
            let html = site.render_version(id);
            assert!(html.contains("<h1>JavaScript Features</h1>"), "{id:?}");
        }
    }

    #[test]
    fn test_scroll_reset_follows_navigation() {
        let site = site();
        for path in ["/", "/es/es2015", "/es/doesnotexist", "/es/es2016#array-includes"] {
            let nav = Navigation::for_path(path);
            let html = html(site.render_path(path));
            assert_eq!(
                html.contains("data-scroll-reset=\"top\""),
                nav.scroll == ScrollAction::ResetToTop,
                "{path}"
            );
        }
    }

    #[test]
    fn test_redirect_follows_navigation() {
        let nav = Navigation::for_path("/random/garbage");
        assert_eq!(nav.history, HistoryMode::Replace);
        let Route::Redirect { to } = nav.route else {
            panic!("expected redirect route");
        };
        assert_eq!(
            site().render_path("/random/garbage"),
            RenderedPage::Redirect { to }
        );
    }

    #[test]
    fn test_not_found_page_is_fallback_shell() {
        let html = site().render_not_found();
        assert!(html.contains("<title>JavaScript Features | AF JS DOCS</title>"));
        assert!(html.contains("<h1>JavaScript Features</h1>"));
        assert_eq!(html.matches("<section ").count(), 0);
        assert!(html.contains("location.pathname"));
        assert!(html.contains("location.replace(\"/\")"));
    }
}
