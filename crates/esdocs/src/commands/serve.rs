//! `esdocs serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use esdocs_config::{CliSettings, Config};
use esdocs_server::{ServerConfig, run_server};

use super::{build_site, load_catalog};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover esdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with catalog.toml (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request tracing and render warnings).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// Validation errors are reported as warnings; the server still starts.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
            output_dir: None,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let catalog = load_catalog(config.paths.content_dir.as_deref())?;
        for issue in catalog.validate().issues() {
            tracing::warn!("{issue}");
        }

        output.info(&format!("Starting server on {}", config.bind_addr()));
        match &config.paths.content_dir {
            Some(dir) => output.info(&format!("Content directory: {}", dir.display())),
            None => output.info("Content: bundled catalog"),
        }
        if let Some(url) = &config.playground.script_url {
            output.info(&format!("Playground script: {url}"));
        } else {
            output.info("Playground: disabled (no script_url in config)");
        }

        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: config.server.port,
            version: version.to_owned(),
        };
        run_server(server_config, build_site(&config, catalog)).await?;

        Ok(())
    }
}
