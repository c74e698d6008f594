//! Client session model: history stack and scroll position.
//!
//! The browser applies these rules through HTTP redirects and the client
//! script; [`Navigator`] states them in one place so they can be tested.

use crate::router::{HistoryMode, Navigation, Route, ScrollAction};

/// Scroll offset of the viewport in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollPosition {
    pub x: u32,
    pub y: u32,
}

impl ScrollPosition {
    pub const TOP: Self = Self { x: 0, y: 0 };
}

/// Result of a single navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// Route that ended up being displayed.
    pub route: Route,
    /// Path now at the top of the history stack.
    pub location: String,
    /// How the requested path affected history.
    pub history: HistoryMode,
    /// Whether the scroll position was reset to the top.
    pub scrolled_to_top: bool,
    /// Requested path, if it was replaced by a redirect.
    pub redirected_from: Option<String>,
}

/// Navigation state of one browser session.
#[derive(Debug)]
pub struct Navigator {
    history: Vec<String>,
    current: Route,
    scroll: ScrollPosition,
}

impl Navigator {
    /// Start a session at `path`, as if the user opened it directly.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let mut navigator = Self {
            history: Vec::new(),
            current: Route::Home,
            scroll: ScrollPosition::TOP,
        };
        navigator.navigate(path);
        navigator
    }

    /// Navigate to `path`.
    ///
    /// Unmatched paths replace themselves with `/`. Every navigation to a
    /// version page scrolls to the top unless the path has a fragment.
    pub fn navigate(&mut self, path: &str) -> NavigationOutcome {
        let navigation = Navigation::for_path(path);
        match navigation.route {
            Route::Redirect { to } => {
                // The unmatched path is pushed and immediately replaced.
                self.history.push(to.clone());
                let mut outcome = self.show(resolve_target(&to), to, ScrollAction::Preserve);
                outcome.history = HistoryMode::Replace;
                outcome.redirected_from = Some(path.to_owned());
                outcome
            }
            route => {
                self.history.push(path.to_owned());
                self.show(route, path.to_owned(), navigation.scroll)
            }
        }
    }

    /// Go back one history entry. Returns `None` at the start of history.
    pub fn back(&mut self) -> Option<NavigationOutcome> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        let location = self.history.last()?.clone();
        let navigation = Navigation::for_path(&location);
        Some(self.show(navigation.route, location, navigation.scroll))
    }

    /// Record a user scroll.
    pub fn scroll_to(&mut self, x: u32, y: u32) {
        self.scroll = ScrollPosition { x, y };
    }

    #[must_use]
    pub fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    #[must_use]
    pub fn current_route(&self) -> &Route {
        &self.current
    }

    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn show(&mut self, route: Route, location: String, scroll: ScrollAction) -> NavigationOutcome {
        let reset = scroll == ScrollAction::ResetToTop;
        if reset {
            self.scroll = ScrollPosition::TOP;
        }
        self.current = route.clone();
        NavigationOutcome {
            route,
            location,
            history: HistoryMode::Push,
            scrolled_to_top: reset,
            redirected_from: None,
        }
    }
}

fn resolve_target(path: &str) -> Route {
    match Navigation::for_path(path).route {
        Route::Redirect { .. } => Route::Home,
        route => route,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_redirect_replaces_history_entry() {
        let mut nav = Navigator::new("/");
        let outcome = nav.navigate("/random/garbage");

        assert_eq!(outcome.route, Route::Home);
        assert_eq!(outcome.location, "/");
        assert_eq!(outcome.history, HistoryMode::Replace);
        assert_eq!(outcome.redirected_from.as_deref(), Some("/random/garbage"));
        assert_eq!(nav.history(), ["/", "/"]);
        assert!(!nav.history().iter().any(|p| p.contains("garbage")));
    }

    #[test]
    fn test_initial_invalid_path_lands_home() {
        let nav = Navigator::new("/nowhere");
        assert_eq!(nav.current_route(), &Route::Home);
        assert_eq!(nav.history(), ["/"]);
    }

    #[test]
    fn test_version_navigation_resets_scroll_each_time() {
        let mut nav = Navigator::new("/");
        nav.scroll_to(0, 400);

        let outcome = nav.navigate("/es/es2015");
        assert!(outcome.scrolled_to_top);
        assert_eq!(nav.scroll_position(), ScrollPosition::TOP);

        nav.scroll_to(0, 1200);
        nav.navigate("/es/es2016");
        assert_eq!(nav.scroll_position(), ScrollPosition::TOP);

        nav.scroll_to(10, 800);
        let outcome = nav.navigate("/es/doesnotexist");
        assert!(outcome.scrolled_to_top);
        assert_eq!(nav.scroll_position(), ScrollPosition::TOP);
    }

    #[test]
    fn test_same_version_resets_scroll() {
        let mut nav = Navigator::new("/es/es2015");
        nav.scroll_to(0, 900);
        let outcome = nav.navigate("/es/es2015");
        assert!(outcome.scrolled_to_top);
        assert_eq!(nav.scroll_position(), ScrollPosition::TOP);
    }

    #[test]
    fn test_fragment_keeps_scroll() {
        let mut nav = Navigator::new("/es/es2015");
        nav.scroll_to(0, 900);
        let outcome = nav.navigate("/es/es2016#array-includes");
        assert!(!outcome.scrolled_to_top);
        assert_eq!(nav.scroll_position(), ScrollPosition { x: 0, y: 900 });
    }

    #[test]
    fn test_home_keeps_scroll() {
        let mut nav = Navigator::new("/es/es2015");
        nav.scroll_to(0, 300);
        let outcome = nav.navigate("/");
        assert!(!outcome.scrolled_to_top);
        assert_eq!(nav.scroll_position(), ScrollPosition { x: 0, y: 300 });
    }

    #[test]
    fn test_back() {
        let mut nav = Navigator::new("/");
        nav.navigate("/es/es2015");
        nav.navigate("/es/es2016");
        nav.scroll_to(0, 50);

        let outcome = nav.back().unwrap();
        assert_eq!(
            outcome.route,
            Route::Version {
                version_id: "es2015".to_owned()
            }
        );
        assert!(outcome.scrolled_to_top);
        assert_eq!(nav.history(), ["/", "/es/es2015"]);

        nav.back().unwrap();
        assert_eq!(nav.current_route(), &Route::Home);
        assert!(nav.back().is_none());
    }
}
