//! CLI command implementations.

mod build;
mod check;
mod serve;

use std::path::Path;
use std::sync::Arc;

use esdocs_catalog::Catalog;
use esdocs_config::Config;
use esdocs_site::{Site, SiteOptions};

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Load the catalog from `content_dir`, or the bundled one when unset.
fn load_catalog(content_dir: Option<&Path>) -> Result<Catalog, CliError> {
    let catalog = match content_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Loading catalog from directory");
            Catalog::from_dir(dir)?
        }
        None => Catalog::bundled()?,
    };
    Ok(catalog)
}

/// Site presentation settings from configuration.
fn site_options(config: &Config) -> SiteOptions {
    let defaults = SiteOptions::default();
    SiteOptions {
        title: config.site.title.clone(),
        author: config.site.author.clone(),
        copyright_year: config.site.copyright_year.unwrap_or(defaults.copyright_year),
        playground_script: config.playground.script_url.clone(),
        ..defaults
    }
}

fn build_site(config: &Config, catalog: Catalog) -> Site {
    Site::new(Arc::new(catalog), site_options(config))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_bundled_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.navigation().len(), 10);
    }

    #[test]
    fn test_load_catalog_missing_dir() {
        let temp = tempfile::tempdir().unwrap();
        let result = load_catalog(Some(&temp.path().join("missing")));
        assert!(matches!(result, Err(CliError::Catalog(_))));
    }

    #[test]
    fn test_site_options_from_config() {
        let mut config = Config::default();
        config.site.title = "My Docs".to_owned();
        config.site.copyright_year = Some(2021);
        config.playground.script_url = Some("https://cdn.example.com/play.js".to_owned());

        let options = site_options(&config);
        assert_eq!(options.title, "My Docs");
        assert_eq!(options.copyright_year, 2021);
        assert_eq!(
            options.playground_script.as_deref(),
            Some("https://cdn.example.com/play.js")
        );
        assert_eq!(options.asset_base, "/assets");
    }

    #[test]
    fn test_site_options_default_year() {
        let options = site_options(&Config::default());
        assert_eq!(options.copyright_year, SiteOptions::default().copyright_year);
    }
}
