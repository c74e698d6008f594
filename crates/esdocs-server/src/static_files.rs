//! Stylesheet and client script serving via `esdocs-assets`.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::error::ServerError;
use crate::state::AppState;

/// Router serving `/assets/{*path}`.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

async fn serve_asset(Path(path): Path<String>) -> Result<Response, ServerError> {
    let content = esdocs_assets::get(&path).ok_or_else(|| ServerError::AssetNotFound(path.clone()))?;
    let mime = esdocs_assets::mime_for(&path);
    let content_type = if mime.starts_with("text/") {
        format!("{mime}; charset=utf-8")
    } else {
        mime.to_owned()
    };
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=300".to_owned()),
        ],
        content.into_owned(),
    )
        .into_response())
}
