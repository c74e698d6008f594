//! Security headers middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy without an external playground script.
const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data:; \
                   connect-src 'self'; \
                   frame-ancestors 'none'";

/// Build the CSP value, allowing the playground script's origin if set.
///
/// The playground evaluates user-edited code, so its presence also
/// requires `'unsafe-eval'`.
fn csp_value(playground_script: Option<&str>) -> String {
    let Some(origin) = playground_script.and_then(origin_of) else {
        return CSP.to_owned();
    };
    CSP.replacen(
        "script-src 'self';",
        &format!("script-src 'self' 'unsafe-eval' {origin};"),
        1,
    )
}

/// `scheme://host[:port]` of an absolute http(s) URL.
fn origin_of(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let scheme_len = url.len() - rest.len();
    let host_len = rest.find('/').unwrap_or(rest.len());
    (host_len > 0).then(|| &url[..scheme_len + host_len])
}

/// Create layer that adds Content-Security-Policy header.
pub(crate) fn csp_layer(playground_script: Option<&str>) -> SetResponseHeaderLayer<HeaderValue> {
    let value = HeaderValue::from_str(&csp_value(playground_script)).unwrap_or_else(|_| {
        tracing::warn!("Playground script URL is not a valid header value, ignoring it in CSP");
        HeaderValue::from_static(CSP)
    });
    SetResponseHeaderLayer::overriding(HeaderName::from_static("content-security-policy"), value)
}

/// Create layer that adds X-Content-Type-Options header.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

/// Create layer that adds X-Frame-Options header.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    )
}
