//! HTML page handlers.
//!
//! Every page request goes through the site router, so `/`, `/es/{id}` and
//! unmatched paths resolve exactly as they do in the client navigation model.
//! Unmatched paths answer `303 See Other`, which browsers follow without
//! keeping the requested URL in history.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Redirect, Response};
use esdocs_site::RenderedPage;
use md5::{Digest, Md5};

use crate::state::AppState;

/// Handle any page path.
pub(crate) async fn get_page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    match state.site.render_path(uri.path()) {
        RenderedPage::Html(html) => html_response(&state.version, &headers, html),
        RenderedPage::Redirect { to } => {
            tracing::debug!(path = uri.path(), to, "Redirecting unmatched path");
            Redirect::to(&to).into_response()
        }
    }
}

fn html_response(version: &str, headers: &HeaderMap, html: String) -> Response {
    let etag = compute_etag(version, &html);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return StatusCode::NOT_MODIFIED.into_response();
    }

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_owned()),
            (header::ETAG, etag),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        html,
    )
        .into_response()
}

/// Compute `ETag` from version and content.
///
/// Uses MD5 hash truncated to 64 bits (16 hex chars).
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}
