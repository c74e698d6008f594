//! `esdocs build` command implementation.

use std::path::PathBuf;

use clap::Args;
use esdocs_config::{CliSettings, Config};
use esdocs_export::StaticSiteBuilder;

use super::{build_site, load_catalog};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover esdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with catalog.toml (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            output_dir: self.output,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let catalog = load_catalog(config.paths.content_dir.as_deref())?;
        let output_dir = &config.paths.output_dir;
        output.info(&format!("Building site into {}", output_dir.display()));

        let summary = StaticSiteBuilder::new(build_site(&config, catalog)).build(output_dir)?;

        output.success(&format!(
            "Wrote {} pages and {} assets to {}",
            summary.pages,
            summary.assets,
            output_dir.display()
        ));
        Ok(())
    }
}
