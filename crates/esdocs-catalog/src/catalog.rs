use std::collections::HashMap;
use std::path::Path;

use crate::content::{FeatureEntry, VersionEntry, VersionRecord};
use crate::error::CatalogError;
use crate::manifest::{MANIFEST_FILE, Manifest};
use crate::source::{BundledSource, ContentSource, DirSource};
use crate::validate::{ValidationReport, validate};

/// Immutable catalog of versions and their features.
///
/// The navigation sequence is kept separately from the version records: a
/// version can be reachable by URL without being listed, and the listing
/// order does not depend on map iteration.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    versions: HashMap<String, VersionRecord>,
    navigation: Vec<VersionEntry>,
}

impl Catalog {
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Catalog with no versions.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_source(&BundledSource)
    }

    /// Load a catalog from a content directory containing `catalog.toml`.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::from_source(&DirSource::new(root.as_ref()))
    }

    /// Load a catalog from any content source.
    ///
    /// Loading does not validate; call [`Catalog::validate`] to check
    /// invariants.
    pub fn from_source(source: &dyn ContentSource) -> Result<Self, CatalogError> {
        let manifest = Manifest::parse(&source.read(MANIFEST_FILE)?)?;
        let catalog = manifest.load(source)?;
        tracing::debug!(
            source = %source.describe(),
            versions = catalog.versions.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    /// Ordered navigation sequence.
    #[must_use]
    pub fn navigation(&self) -> &[VersionEntry] {
        &self.navigation
    }

    #[must_use]
    pub fn version(&self, id: &str) -> Option<&VersionRecord> {
        self.versions.get(id)
    }

    /// Features of a version, or an empty slice for unknown ids.
    #[must_use]
    pub fn features(&self, id: &str) -> &[FeatureEntry] {
        self.version(id).map_or(&[], |record| &record.features)
    }

    /// Ids of all version records in unspecified order.
    pub fn version_ids(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Check catalog invariants.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate(self)
    }
}

/// Builder for [`Catalog`].
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    versions: HashMap<String, VersionRecord>,
    navigation: Vec<VersionEntry>,
}

impl CatalogBuilder {
    /// Append an entry to the navigation sequence.
    #[must_use]
    pub fn navigation_entry(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.navigation.push(VersionEntry::new(id, name));
        self
    }

    /// Add a version record, replacing any record with the same id.
    #[must_use]
    pub fn version(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        features: Vec<FeatureEntry>,
    ) -> Self {
        let record = VersionRecord {
            name: name.into(),
            features,
        };
        self.versions.insert(id.into(), record);
        self
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        Catalog {
            versions: self.versions,
            navigation: self.navigation,
        }
    }
}
