use std::path::PathBuf;

use crate::validate::ValidationReport;

/// Error loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Content file does not exist in the source.
    #[error("Content file not found: {0}")]
    NotFound(String),
    /// Manifest references a markdown file that does not exist.
    #[error("Missing content file {path} for feature '{feature}' in {version}")]
    MissingContent {
        path: String,
        version: String,
        feature: String,
    },
    /// Content path escapes the content root or is otherwise unusable.
    #[error("Invalid content path: {0}")]
    InvalidPath(String),
    /// Content file is not valid UTF-8.
    #[error("Content file is not valid UTF-8: {0}")]
    Encoding(String),
    /// I/O error.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Manifest parsing error.
    #[error("Manifest parse error: {0}")]
    Manifest(#[from] toml::de::Error),
    /// Catalog violates its invariants.
    #[error("Catalog validation failed: {0}")]
    Invalid(ValidationReport),
}
