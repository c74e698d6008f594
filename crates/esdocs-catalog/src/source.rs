//! Content sources for catalog manifests and markdown bodies.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use rust_embed::RustEmbed;

use crate::error::CatalogError;

/// Where catalog files are read from.
///
/// Paths are relative, `/`-separated and resolved against the source root.
pub trait ContentSource {
    /// Read a UTF-8 file.
    fn read(&self, path: &str) -> Result<String, CatalogError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

#[derive(RustEmbed)]
#[folder = "content/"]
struct BundledContent;

/// Content compiled into the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledSource;

impl ContentSource for BundledSource {
    fn read(&self, path: &str) -> Result<String, CatalogError> {
        let file =
            BundledContent::get(path).ok_or_else(|| CatalogError::NotFound(path.to_owned()))?;
        String::from_utf8(file.data.into_owned())
            .map_err(|_| CatalogError::Encoding(path.to_owned()))
    }

    fn describe(&self) -> String {
        "bundled content".to_owned()
    }
}

/// Content directory on disk.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, CatalogError> {
        let relative = Path::new(path);
        let is_safe = !path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !is_safe {
            return Err(CatalogError::InvalidPath(path.to_owned()));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentSource for DirSource {
    fn read(&self, path: &str) -> Result<String, CatalogError> {
        let full_path = self.resolve(path)?;
        std::fs::read_to_string(&full_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CatalogError::NotFound(path.to_owned()),
            ErrorKind::InvalidData => CatalogError::Encoding(path.to_owned()),
            _ => CatalogError::Io {
                path: full_path,
                source: e,
            },
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
