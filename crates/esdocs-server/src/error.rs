//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Static asset not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// Bind address could not be parsed.
    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::AssetNotFound(path) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Asset not found", "path": path}),
            ),
            Self::InvalidAddress(_) | Self::Io(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": self.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
