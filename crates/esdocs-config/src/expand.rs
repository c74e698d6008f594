//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Strings without `${` are returned unchanged, so a bare `$` in a URL or
/// path is left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        std::env::var(var).map(Some).map_err(|_| LookupError {
            var_name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.var_name),
    })
}

struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("ESDOCS_TEST_HOST", "0.0.0.0");
        }
        assert_eq!(
            expand_env("${ESDOCS_TEST_HOST}", "server.host").unwrap(),
            "0.0.0.0"
        );
        unsafe {
            std::env::remove_var("ESDOCS_TEST_HOST");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("ESDOCS_TEST_UNSET");
        }
        assert_eq!(
            expand_env("${ESDOCS_TEST_UNSET:-dist}", "build.output_dir").unwrap(),
            "dist"
        );
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::set_var("ESDOCS_TEST_CDN", "cdn.example.com");
        }
        assert_eq!(
            expand_env("https://${ESDOCS_TEST_CDN}/play.js", "playground.script_url").unwrap(),
            "https://cdn.example.com/play.js"
        );
        unsafe {
            std::env::remove_var("ESDOCS_TEST_CDN");
        }
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: each test uses its own variable name
        unsafe {
            std::env::remove_var("ESDOCS_TEST_MISSING");
        }
        let err = expand_env("${ESDOCS_TEST_MISSING}", "content.dir").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable error in content.dir: ${ESDOCS_TEST_MISSING} not set"
        );
    }

    #[test]
    fn test_bare_dollar_unchanged() {
        assert_eq!(expand_env("$HOME/docs", "content.dir").unwrap(), "$HOME/docs");
    }
}
