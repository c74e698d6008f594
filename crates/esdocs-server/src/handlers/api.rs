//! JSON API for versions and their features.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use esdocs_site::{FALLBACK_TITLE, fragment_href, version_href};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/versions.
#[derive(Serialize)]
pub(crate) struct VersionsResponse {
    versions: Vec<VersionItem>,
}

#[derive(Serialize)]
struct VersionItem {
    id: String,
    name: String,
    /// Page URL path.
    path: String,
}

/// Response for GET /api/versions/{id}.
#[derive(Serialize)]
pub(crate) struct VersionResponse {
    id: String,
    title: String,
    features: Vec<FeatureItem>,
}

#[derive(Serialize)]
struct FeatureItem {
    id: String,
    title: String,
    /// Fragment link to the feature section.
    anchor: String,
    /// True when the feature has no authored content.
    pending: bool,
}

/// Handle GET /api/versions.
pub(crate) async fn get_versions(State(state): State<Arc<AppState>>) -> Json<VersionsResponse> {
    let versions = state
        .site
        .catalog()
        .navigation()
        .iter()
        .map(|entry| VersionItem {
            id: entry.id.clone(),
            name: entry.name.clone(),
            path: version_href(&entry.id),
        })
        .collect();
    Json(VersionsResponse { versions })
}

/// Handle GET /api/versions/{id}.
///
/// Unknown ids return the fallback title and no features.
pub(crate) async fn get_version(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<VersionResponse> {
    let catalog = state.site.catalog();
    let title = catalog
        .version(&id)
        .map_or(FALLBACK_TITLE, |record| record.name.as_str())
        .to_owned();
    let features = catalog
        .features(&id)
        .iter()
        .map(|feature| FeatureItem {
            id: feature.id.clone(),
            title: feature.title.clone(),
            anchor: fragment_href(&feature.id),
            pending: feature.content.is_pending(),
        })
        .collect();
    Json(VersionResponse {
        id,
        title,
        features,
    })
}
