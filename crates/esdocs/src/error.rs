//! CLI error types.

use esdocs_catalog::CatalogError;
use esdocs_config::ConfigError;
use esdocs_export::ExportError;
use esdocs_server::ServerError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Server(#[from] ServerError),
}
