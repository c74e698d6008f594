//! Configuration management for esdocs.
//!
//! Parses `esdocs.toml` with serde and discovers it in the current directory
//! or its parents. CLI arguments override file values via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` expands to the value of VAR, errors if unset
//! - `${VAR:-default}` expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `content.dir`
//! - `build.output_dir`
//! - `playground.script_url`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Content directory; replaces the bundled catalog.
    pub content_dir: Option<PathBuf>,
    /// Static export output directory.
    pub output_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "esdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub playground: PlaygroundConfig,
    content: ContentConfigRaw,
    build: BuildConfigRaw,

    /// Resolved filesystem paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// HTTP server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Site presentation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Navbar brand and home page title.
    pub title: String,
    pub author: String,
    /// Footer copyright year; the current year when unset.
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AF JS DOCS".to_owned(),
            author: "Achmad Farid".to_owned(),
            copyright_year: None,
        }
    }
}

/// Client-side live playground settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Script that runs the live playground blocks in the browser.
    ///
    /// It is loaded with `defer` on every page. For each block the page
    /// script fires a bubbling `esdocs:playground` event on the block's
    /// container, then calls `window.esdocsPlayground.mount(container, options)`
    /// if the script defined it. `options` holds `language`, `mode`
    /// (`"inline"` or `"no-inline"`), `source`, and the `editor`, `preview`
    /// and `error` elements. Libraries such as react-live need a small
    /// adapter script that implements one of these hooks. Without a script,
    /// blocks show their source with no output.
    pub script_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ContentConfigRaw {
    dir: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Paths resolved against the config file directory.
#[derive(Debug, Default)]
pub struct PathsConfig {
    /// Content directory with `catalog.toml`; `None` uses bundled content.
    pub content_dir: Option<PathBuf>,
    /// Static export output directory.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `esdocs.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// CLI settings are applied last and take precedence.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.paths.content_dir = Some(content_dir.clone());
        }
        if let Some(output_dir) = &settings.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfig::default(),
            playground: PlaygroundConfig::default(),
            content: ContentConfigRaw::default(),
            build: BuildConfigRaw::default(),
            paths: PathsConfig {
                content_dir: None,
                output_dir: base.join("dist"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after applying CLI
    /// settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        // Port 0 would bind a random port, which is never what a config means.
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }
        require_non_empty(&self.site.title, "site.title")?;
        if let Some(url) = &self.playground.script_url {
            require_http_url(url, "playground.script_url")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        if let Some(dir) = &self.content.dir {
            self.content.dir = Some(expand::expand_env(dir, "content.dir")?);
        }
        if let Some(dir) = &self.build.output_dir {
            self.build.output_dir = Some(expand::expand_env(dir, "build.output_dir")?);
        }
        if let Some(url) = &self.playground.script_url {
            self.playground.script_url = Some(expand::expand_env(url, "playground.script_url")?);
        }
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        self.paths = PathsConfig {
            content_dir: self.content.dir.as_deref().map(|d| config_dir.join(d)),
            output_dir: config_dir.join(self.build.output_dir.as_deref().unwrap_or("dist")),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(dir: &Path, toml: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.title, "AF JS DOCS");
        assert_eq!(config.site.author, "Achmad Farid");
        assert_eq!(config.paths.content_dir, None);
        assert_eq!(config.paths.output_dir, PathBuf::from("/test/dist"));
        assert_eq!(config.playground.script_url, None);
        assert_eq!(config.bind_addr(), "127.0.0.1:7979");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.copyright_year, None);
    }

    #[test]
    fn test_parse_site_and_playground() {
        let toml = r#"
[site]
title = "JS Notes"
author = "Someone"
copyright_year = 2024

[playground]
script_url = "https://cdn.example.com/playground.js"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "JS Notes");
        assert_eq!(config.site.author, "Someone");
        assert_eq!(config.site.copyright_year, Some(2024));
        assert_eq!(
            config.playground.script_url.as_deref(),
            Some("https://cdn.example.com/playground.js")
        );
    }

    #[test]
    fn test_load_resolves_paths_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            r#"
[content]
dir = "content"

[build]
output_dir = "public"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.paths.content_dir, Some(dir.path().join("content")));
        assert_eq!(config.paths.output_dir, dir.path().join("public"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/esdocs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server]\nhost = \"0.0.0.0\"\nport = 8000\n");
        let settings = CliSettings {
            port: Some(9000),
            content_dir: Some(PathBuf::from("/srv/content")),
            output_dir: Some(PathBuf::from("/srv/out")),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.paths.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(config.paths.output_dir, PathBuf::from("/srv/out"));
    }

    #[test]
    fn test_cli_port_zero_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "");
        let settings = CliSettings {
            port: Some(0),
            ..CliSettings::default()
        };
        let err = Config::load(Some(&path), Some(&settings)).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: server.port cannot be 0");
    }

    #[test]
    fn test_validate_empty_host() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server]\nhost = \"\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: server.host cannot be empty");
    }

    #[test]
    fn test_validate_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[site]\ntitle = \"  \"\n");
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_playground_url_scheme() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[playground]\nscript_url = \"ftp://x/play.js\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: playground.script_url must start with http:// or https://"
        );
    }

    #[test]
    fn test_env_expansion_in_file() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("ESDOCS_TEST_OUT", "site");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[build]\noutput_dir = \"${ESDOCS_TEST_OUT}/html\"\n[server]\nhost = \"${ESDOCS_TEST_NO_HOST:-localhost}\"\n",
        );
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.paths.output_dir, dir.path().join("site/html"));
        assert_eq!(config.server.host, "localhost");
        unsafe {
            std::env::remove_var("ESDOCS_TEST_OUT");
        }
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server\nport = 1");
        assert!(matches!(
            Config::load(Some(&path), None),
            Err(ConfigError::Parse(_))
        ));
    }
}
