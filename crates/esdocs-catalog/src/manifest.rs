//! `catalog.toml` manifest format.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogBuilder};
use crate::content::FeatureEntry;
use crate::error::CatalogError;
use crate::source::ContentSource;

/// Manifest file name at the root of a content source.
pub const MANIFEST_FILE: &str = "catalog.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Manifest {
    #[serde(default)]
    navigation: Vec<NavigationDef>,
    #[serde(default)]
    versions: BTreeMap<String, VersionDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NavigationDef {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VersionDef {
    name: String,
    #[serde(default)]
    features: Vec<FeatureDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FeatureDef {
    id: String,
    title: String,
    /// Markdown file relative to the content root.
    content: Option<String>,
}

impl Manifest {
    pub(crate) fn parse(text: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(text)?)
    }

    /// Build a catalog, reading every referenced markdown body from `source`.
    pub(crate) fn load(self, source: &dyn ContentSource) -> Result<Catalog, CatalogError> {
        let mut builder = CatalogBuilder::default();
        for entry in self.navigation {
            builder = builder.navigation_entry(entry.id, entry.name);
        }

        for (version_id, version) in self.versions {
            let features = version
                .features
                .into_iter()
                .map(|feature| load_feature(source, &version_id, feature))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.version(version_id, version.name, features);
        }

        Ok(builder.build())
    }
}

fn load_feature(
    source: &dyn ContentSource,
    version_id: &str,
    feature: FeatureDef,
) -> Result<FeatureEntry, CatalogError> {
    let Some(path) = feature.content else {
        return Ok(FeatureEntry::pending(feature.id, feature.title));
    };
    let markdown = source.read(&path).map_err(|e| match e {
        CatalogError::NotFound(path) => CatalogError::MissingContent {
            path,
            version: version_id.to_owned(),
            feature: feature.id.clone(),
        },
        other => other,
    })?;
    Ok(FeatureEntry::markdown(feature.id, feature.title, markdown))
}
