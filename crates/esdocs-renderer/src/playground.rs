//! Live code playground blocks.
//!
//! A fence like ` ```jsx live ` becomes an editable playground container. The
//! playground engine runs in the browser and is not part of this crate: the
//! markup only carries the snippet source and its rendering mode.

use std::collections::HashMap;
use std::fmt::Write;

use crate::code_block::{CodeBlockProcessor, ProcessResult};
use crate::state::escape_html;

/// Languages that can be turned into live playgrounds.
const LIVE_LANGUAGES: &[&str] = &["jsx", "js", "javascript"];

/// How the playground evaluates a snippet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaygroundMode {
    /// The snippet is a single expression whose value is rendered.
    Inline,
    /// The snippet calls `render(...)` itself.
    #[default]
    NoInline,
}

impl PlaygroundMode {
    /// Value of the `data-mode` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::NoInline => "no-inline",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "inline" => Some(Self::Inline),
            "no-inline" | "block" => Some(Self::NoInline),
            _ => None,
        }
    }
}

/// Code block processor for ` ```jsx live ` fences.
#[derive(Debug, Default)]
pub struct LivePlayground {
    warnings: Vec<String>,
}

impl LivePlayground {
    /// Create a new playground processor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CodeBlockProcessor for LivePlayground {
    fn process(
        &mut self,
        language: &str,
        attrs: &HashMap<String, String>,
        source: &str,
        index: usize,
    ) -> ProcessResult {
        if !LIVE_LANGUAGES.contains(&language) || !attrs.contains_key("live") {
            return ProcessResult::PassThrough;
        }

        let mode = match attrs.get("mode") {
            None => PlaygroundMode::default(),
            Some(value) => PlaygroundMode::parse(value).unwrap_or_else(|| {
                self.warnings.push(format!(
                    "code block {index}: unknown playground mode '{value}', using no-inline"
                ));
                PlaygroundMode::default()
            }),
        };

        ProcessResult::Inline(playground_html(language, mode, source, index))
    }

    fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn playground_html(language: &str, mode: PlaygroundMode, source: &str, index: usize) -> String {
    let mut html = String::with_capacity(source.len() + 512);
    write!(
        html,
        r#"<div class="live-playground" data-language="{}" data-mode="{}" data-index="{index}">"#,
        escape_html(language),
        mode.as_str(),
    )
    .unwrap();
    write!(
        html,
        r#"<textarea class="live-editor" spellcheck="false" aria-label="Editable code sample">{}</textarea>"#,
        escape_html(source.trim_end_matches('\n')),
    )
    .unwrap();
    html.push_str(
        r#"<div class="live-output"><strong>Output:</strong><div class="live-preview"></div></div>"#,
    );
    html.push_str(r#"<div class="live-error" role="alert"></div>"#);
    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_attrs() -> HashMap<String, String> {
        HashMap::from([("live".to_owned(), String::new())])
    }

    #[test]
    fn test_live_jsx_becomes_playground() {
        let mut processor = LivePlayground::new();
        let result = processor.process("jsx", &live_attrs(), "render(<p>hi</p>);\n", 0);

        let ProcessResult::Inline(html) = result else {
            panic!("expected inline playground markup");
        };
        assert!(html.contains(r#"data-mode="no-inline""#));
        assert!(html.contains(r#"data-language="jsx""#));
        assert!(html.contains("render(&lt;p&gt;hi&lt;/p&gt;);</textarea>"));
        assert!(html.contains("Output:"));
        assert!(html.contains("live-error"));
    }

    #[test]
    fn test_plain_jsx_passes_through() {
        let mut processor = LivePlayground::new();
        let result = processor.process("jsx", &HashMap::new(), "const a = 1;", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }

    #[test]
    fn test_live_flag_on_other_language_passes_through() {
        let mut processor = LivePlayground::new();
        let result = processor.process("rust", &live_attrs(), "fn main() {}", 0);
        assert_eq!(result, ProcessResult::PassThrough);
    }

    #[test]
    fn test_inline_mode() {
        let mut processor = LivePlayground::new();
        let mut attrs = live_attrs();
        attrs.insert("mode".to_owned(), "inline".to_owned());

        let ProcessResult::Inline(html) = processor.process("js", &attrs, "<b>1</b>", 2) else {
            panic!("expected inline playground markup");
        };
        assert!(html.contains(r#"data-mode="inline""#));
        assert!(html.contains(r#"data-index="2""#));
    }

    #[test]
    fn test_unknown_mode_warns_and_defaults() {
        let mut processor = LivePlayground::new();
        let mut attrs = live_attrs();
        attrs.insert("mode".to_owned(), "sideways".to_owned());

        let ProcessResult::Inline(html) = processor.process("jsx", &attrs, "x", 0) else {
            panic!("expected inline playground markup");
        };
        assert!(html.contains(r#"data-mode="no-inline""#));
        assert_eq!(processor.warnings().len(), 1);
        assert!(processor.warnings()[0].contains("sideways"));
    }
}
