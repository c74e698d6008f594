//! Static site export for esdocs.
//!
//! Writes the pages served by the HTTP server to a directory that any static
//! file host can serve:
//!
//! ```text
//! index.html
//! es/{versionId}/index.html
//! 404.html            fallback shell for unknown /es/{id}; other paths go to "/"
//! assets/styles.css
//! assets/app.js
//! ```

mod builder;

pub use builder::{ExportError, ExportSummary, StaticSiteBuilder};
