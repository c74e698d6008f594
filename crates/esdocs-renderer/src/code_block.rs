//! Code block processor trait for special fenced blocks.
//!
//! Processors are registered with the renderer and checked in order when a code
//! block is encountered. The first processor returning a non-`PassThrough`
//! result wins.

use std::collections::HashMap;

/// Result of processing a code block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessResult {
    /// Replace the code block with inline HTML.
    Inline(String),

    /// Render as a regular `<pre><code>` block.
    PassThrough,
}

/// Trait for processing special code blocks.
pub trait CodeBlockProcessor {
    /// Process a code block and return the result.
    ///
    /// # Arguments
    ///
    /// * `language` - Language identifier from fence info string
    /// * `attrs` - Attributes parsed from fence (`key=value` pairs and bare flags)
    /// * `source` - Raw content of the code block
    /// * `index` - Zero-based index of the code block in the document
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult;

    /// Get warnings generated during processing.
    ///
    /// Default implementation returns empty slice.
    fn warnings(&self) -> &[String] {
        &[]
    }
}

/// Parse fence info string into language and attributes.
///
/// Format: `language [flag ...] [key=value ...]`. Bare flags such as `live`
/// are stored with an empty value.
#[must_use]
pub(crate) fn parse_fence_info(info: &str) -> (String, HashMap<String, String>) {
    let mut parts = info.split_whitespace();
    let language = parts.next().unwrap_or("").to_owned();

    let mut attrs = HashMap::new();
    for part in parts {
        if let Some((key, value)) = part.split_once('=') {
            let value = value.trim_matches('"').trim_matches('\'');
            attrs.insert(key.to_owned(), value.to_owned());
        } else {
            attrs.insert(part.to_owned(), String::new());
        }
    }

    (language, attrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fence_info_language_only() {
        let (lang, attrs) = parse_fence_info("rust");
        assert_eq!(lang, "rust");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_parse_fence_info_bare_flag() {
        let (lang, attrs) = parse_fence_info("jsx live");
        assert_eq!(lang, "jsx");
        assert_eq!(attrs.get("live"), Some(&String::new()));
    }

    #[test]
    fn test_parse_fence_info_flag_and_attr() {
        let (lang, attrs) = parse_fence_info("jsx live mode=inline");
        assert_eq!(lang, "jsx");
        assert!(attrs.contains_key("live"));
        assert_eq!(attrs.get("mode"), Some(&"inline".to_owned()));
    }

    #[test]
    fn test_parse_fence_info_quoted_values() {
        let (_, attrs) = parse_fence_info("js mode='inline'");
        assert_eq!(attrs.get("mode"), Some(&"inline".to_owned()));
    }

    #[test]
    fn test_parse_fence_info_empty() {
        let (lang, attrs) = parse_fence_info("   ");
        assert_eq!(lang, "");
        assert!(attrs.is_empty());
    }

    #[test]
    fn test_default_warnings_empty() {
        struct MinimalProcessor;

        impl CodeBlockProcessor for MinimalProcessor {
            fn process(
                &mut self,
                _language: &str,
                _attrs: &HashMap<String, String>,
                _source: &str,
                _index: usize,
            ) -> ProcessResult {
                ProcessResult::PassThrough
            }
        }

        assert!(MinimalProcessor.warnings().is_empty());
    }
}
