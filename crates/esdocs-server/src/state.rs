//! Application state.

use esdocs_site::Site;

/// State shared by all request handlers.
pub(crate) struct AppState {
    /// Page renderer over the shared catalog.
    pub(crate) site: Site,
    /// Application version, mixed into `ETag`s.
    pub(crate) version: String,
}
