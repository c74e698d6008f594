//! `esdocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use esdocs_catalog::{Catalog, Severity};
use esdocs_config::{CliSettings, Config};

use super::load_catalog;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover esdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory with catalog.toml (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Prints every issue; fails if any has error severity.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let catalog = load_catalog(config.paths.content_dir.as_deref())?;

        report(&output, &catalog)
    }
}

fn report(output: &Output, catalog: &Catalog) -> Result<(), CliError> {
    let report = catalog.validate();
    for issue in report.issues() {
        match issue.severity() {
            Severity::Error => output.error(&format!("error: {issue}")),
            Severity::Notice => output.warning(&format!("notice: {issue}")),
        }
    }

    let report = report.into_result()?;
    let features: usize = catalog
        .version_ids()
        .map(|id| catalog.features(id).len())
        .sum();
    output.success(&format!(
        "Catalog OK: {} versions, {} features, {} notices",
        catalog.navigation().len(),
        features,
        report.notices().count()
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_bundled_catalog_passes() {
        let catalog = Catalog::bundled().unwrap();
        assert!(report(&Output::new(), &catalog).is_ok());
    }

    #[test]
    fn test_report_dangling_navigation_fails() {
        let catalog = Catalog::builder()
            .navigation_entry("es2015", "ES2015 (ES6)")
            .navigation_entry("es2099", "ES2099")
            .version("es2015", "ES2015 (ES6)", Vec::new())
            .build();

        let result = report(&Output::new(), &catalog);
        assert!(matches!(result, Err(CliError::Catalog(_))));
    }
}
