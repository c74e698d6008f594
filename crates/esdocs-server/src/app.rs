//! Router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let playground_script = state.site.options().playground_script.clone();

    let api_routes = Router::new()
        .route("/api/versions", get(handlers::api::get_versions))
        .route("/api/versions/{id}", get(handlers::api::get_version));

    let page_routes = Router::new()
        .route("/", get(handlers::pages::get_page))
        .route("/es/{id}", get(handlers::pages::get_page))
        .fallback(handlers::pages::get_page);

    Router::new()
        .merge(api_routes)
        .merge(static_files::static_router())
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer(playground_script.as_deref()))
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
