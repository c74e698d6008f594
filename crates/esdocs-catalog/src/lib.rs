//! Content catalog for the esdocs site.
//!
//! The [`Catalog`] maps ECMAScript version ids to their [`VersionRecord`]s and
//! keeps a separate ordered navigation sequence of [`VersionEntry`]s, which is
//! the authoritative display order. A catalog is built once and then shared
//! read-only (usually as `Arc<Catalog>`).
//!
//! Catalogs come from three places:
//!
//! - [`Catalog::bundled`]: the content compiled into the binary
//! - [`Catalog::from_dir`]: a content directory with a `catalog.toml` manifest
//! - [`Catalog::builder`]: constructed in code
//!
//! # Example
//!
//! ```
//! use esdocs_catalog::{Catalog, FeatureEntry};
//!
//! let catalog = Catalog::builder()
//!     .navigation_entry("es2016", "ES2016 (ES7)")
//!     .version(
//!         "es2016",
//!         "ES2016 (ES7)",
//!         vec![FeatureEntry::pending("array-includes", "Array.prototype.includes()")],
//!     )
//!     .build();
//!
//! assert_eq!(catalog.features("es2016").len(), 1);
//! assert!(catalog.version("es1999").is_none());
//! assert!(!catalog.validate().has_errors());
//! ```

mod catalog;
mod content;
mod error;
mod manifest;
mod source;
mod validate;

pub use catalog::{Catalog, CatalogBuilder};
pub use content::{
    FeatureContent, FeatureEntry, MarkdownBody, Markup, Renderable, VersionEntry, VersionRecord,
};
pub use error::CatalogError;
pub use manifest::MANIFEST_FILE;
pub use source::{BundledSource, ContentSource, DirSource};
pub use validate::{IssueKind, Severity, ValidationIssue, ValidationReport};
