//! HTTP server for esdocs.
//!
//! Serves the rendered site with axum:
//! - HTML pages for `/` and `/es/{versionId}`, with unmatched paths redirected
//!   to `/`
//! - JSON API under `/api/versions`
//! - Stylesheet and client script under `/assets/`
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (esdocs-server)
//!                        │
//!                        ├─► Page routes ──► Site::render_path ──► Arc<Catalog>
//!                        │
//!                        ├─► API routes  ──► Catalog lookups
//!                        │
//!                        └─► /assets/*   ──► esdocs-assets (embedded or filesystem)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use esdocs_site::Site;

pub use error::ServerError;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Application version (mixed into `ETag`s).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
pub async fn run_server(config: ServerConfig, site: Site) -> Result<(), ServerError> {
    let state = Arc::new(AppState {
        site,
        version: config.version.clone(),
    });
    let app = app::create_router(state);

    let bind = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&bind).map_err(|_| ServerError::InvalidAddress(bind))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}
