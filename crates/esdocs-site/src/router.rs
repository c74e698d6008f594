//! URL path to page resolution.
//!
//! Routing is a pure function of the path. Only two shapes are pages:
//!
//! - `/` is the home listing
//! - `/es/{versionId}` is a version page (one non-empty segment, optional
//!   trailing slash)
//!
//! Everything else redirects to `/` and replaces the current history entry,
//! so the unmatched path never stays in the browser history.

use percent_encoding::percent_decode_str;

/// Path prefix of version pages.
pub const VERSION_PREFIX: &str = "/es/";

/// Page selected by a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Version page. The id is not checked against the catalog here.
    Version { version_id: String },
    /// Unmatched path; navigate to `to` instead.
    Redirect { to: String },
}

/// How a navigation updates the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// What happens to the scroll position after a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    ResetToTop,
    Preserve,
}

/// A resolved route together with its history and scroll behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub history: HistoryMode,
    pub scroll: ScrollAction,
}

impl Navigation {
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let route = resolve_route(path);
        let history = match route {
            Route::Redirect { .. } => HistoryMode::Replace,
            _ => HistoryMode::Push,
        };
        // A fragment names its own scroll target.
        let scroll = match route {
            Route::Version { .. } if !path.contains('#') => ScrollAction::ResetToTop,
            _ => ScrollAction::Preserve,
        };
        Self {
            route,
            history,
            scroll,
        }
    }
}

/// Resolve a request path to a [`Route`].
///
/// Query strings and fragments are ignored. The version id is
/// percent-decoded; invalid UTF-8 is replaced rather than rejected.
#[must_use]
pub fn resolve_route(path: &str) -> Route {
    let path = strip_query_and_fragment(path);
    if path == "/" {
        return Route::Home;
    }

    let Some(rest) = path.strip_prefix(VERSION_PREFIX) else {
        return redirect_home();
    };
    let segment = rest.strip_suffix('/').unwrap_or(rest);
    if segment.is_empty() || segment.contains('/') {
        return redirect_home();
    }

    let version_id = percent_decode_str(segment).decode_utf8_lossy().into_owned();
    tracing::debug!(path, version_id, "Resolved version route");
    Route::Version { version_id }
}

fn strip_query_and_fragment(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |end| &path[..end])
}

fn redirect_home() -> Route {
    Route::Redirect { to: "/".to_owned() }
}
