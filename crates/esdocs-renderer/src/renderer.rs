//! Markdown to HTML renderer.

use std::collections::HashMap;
use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::code_block::{CodeBlockProcessor, ProcessResult, parse_fence_info};
use crate::state::{CodeBlockState, HeadingState, TableState, escape_html};

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Warnings generated by code block processors.
    pub warnings: Vec<String>,
}

/// Markdown renderer producing HTML fragments.
///
/// Handles common elements (paragraphs, lists, tables, inline formatting)
/// directly and delegates fenced code blocks to registered
/// [`CodeBlockProcessor`]s before falling back to `<pre><code>`.
pub struct MarkdownRenderer {
    output: String,
    code: CodeBlockState,
    table: TableState,
    heading: HeadingState,
    image_alt: Option<String>,
    pending_image: Option<(String, String)>,
    processors: Vec<Box<dyn CodeBlockProcessor>>,
    code_block_index: usize,
    pending_attrs: HashMap<String, String>,
}

impl MarkdownRenderer {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            code: CodeBlockState::default(),
            table: TableState::default(),
            heading: HeadingState::default(),
            image_alt: None,
            pending_image: None,
            processors: Vec::new(),
            code_block_index: 0,
            pending_attrs: HashMap::new(),
        }
    }

    /// Prefix generated heading ids, so several bodies can share one page.
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.heading = HeadingState::with_prefix((!prefix.is_empty()).then_some(prefix));
        self
    }

    /// Add a code block processor.
    ///
    /// Processors are checked in order when a code block is encountered.
    /// The first processor returning a non-`PassThrough` result wins.
    #[must_use]
    pub fn with_processor<P: CodeBlockProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Parser options (GitHub Flavored Markdown).
    #[must_use]
    pub fn parser_options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
    }

    /// Render markdown text.
    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        self.render(Parser::new_ext(markdown, Self::parser_options()))
    }

    /// Render markdown events and return the result.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            warnings: self
                .processors
                .iter()
                .flat_map(|p| p.warnings())
                .cloned()
                .collect(),
        }
    }

    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else if self.image_alt.is_none() {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.output.push_str(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => self.output.push_str(if checked {
                r#"<input type="checkbox" checked disabled> "#
            } else {
                r#"<input type="checkbox" disabled> "#
            }),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {}
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => self.heading.start_heading(heading_level_to_num(level)),
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let (lang, attrs) = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => {
                        let (lang, attrs) = parse_fence_info(info);
                        (if lang.is_empty() { None } else { Some(lang) }, attrs)
                    }
                    _ => (None, HashMap::new()),
                };
                self.pending_attrs = attrs;
                self.code.start(lang);
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => self.output.push_str("<dl>"),
            Tag::DefinitionListTitle => self.output.push_str("<dt>"),
            Tag::DefinitionListDefinition => self.output.push_str("<dd>"),
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
            Tag::Link { dest_url, .. } => {
                let link_tag = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link_tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image_alt = Some(String::new());
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => {
                if let Some((level, id, html)) = self.heading.complete_heading() {
                    write!(
                        self.output,
                        r#"<h{level} id="{}">{}</h{level}>"#,
                        escape_html(&id),
                        html.trim()
                    )
                    .unwrap();
                }
            }
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => self.finish_code_block(),
            TagEnd::List(ordered) => self.output.push_str(if ordered { "</ol>" } else { "</ul>" }),
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::DefinitionList => self.output.push_str("</dl>"),
            TagEnd::DefinitionListTitle => self.output.push_str("</dt>"),
            TagEnd::DefinitionListDefinition => self.output.push_str("</dd>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                let alt = self.image_alt.take().unwrap_or_default();
                if let Some((src, title)) = self.pending_image.take() {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, escape_html(&title))
                    };
                    let img = format!(
                        r#"<img src="{}"{title_attr} alt="{}">"#,
                        escape_html(&src),
                        escape_html(&alt)
                    );
                    self.push_inline(&img);
                }
            }
        }
    }

    fn finish_code_block(&mut self) {
        let (lang, content) = self.code.end();
        let attrs = std::mem::take(&mut self.pending_attrs);
        let index = self.code_block_index;
        self.code_block_index += 1;

        let processed = lang.as_ref().and_then(|lang_str| {
            self.processors
                .iter_mut()
                .find_map(|processor| match processor.process(lang_str, &attrs, &content, index) {
                    ProcessResult::Inline(html) => Some(html),
                    ProcessResult::PassThrough => None,
                })
        });

        match (processed, lang) {
            (Some(html), _) => self.output.push_str(&html),
            (None, Some(lang)) => write!(
                self.output,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(&lang),
                escape_html(&content)
            )
            .unwrap(),
            (None, None) => {
                write!(self.output, "<pre><code>{}</code></pre>", escape_html(&content)).unwrap();
            }
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if let Some(alt) = self.image_alt.as_mut() {
            alt.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
        }
        let html = format!("<code>{}</code>", escape_html(code));
        self.push_inline(&html);
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else {
            self.push_inline("\n");
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::LivePlayground;

    fn render_html(markdown: &str) -> RenderResult {
        MarkdownRenderer::new().render_markdown(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        let result = render_html("Hello, world!");
        assert_eq!(result.html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_inline_formatting() {
        let result = render_html("The `let` keyword, **let** can be *reassigned*.");
        assert_eq!(
            result.html,
            "<p>The <code>let</code> keyword, <strong>let</strong> can be <em>reassigned</em>.</p>"
        );
    }

    #[test]
    fn test_heading_with_prefixed_id() {
        let result = MarkdownRenderer::new()
            .with_id_prefix("classes")
            .render_markdown("### Key Concepts:");
        assert_eq!(
            result.html,
            r#"<h3 id="classes-key-concepts">Key Concepts:</h3>"#
        );
    }

    #[test]
    fn test_heading_with_inline_code() {
        let result = render_html("### Using `includes()`");
        assert_eq!(
            result.html,
            r#"<h3 id="using-includes">Using <code>includes()</code></h3>"#
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let result = render_html("```js\nconst a = 1 < 2;\n```");
        assert_eq!(
            result.html,
            "<pre><code class=\"language-js\">const a = 1 &lt; 2;\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_without_language() {
        let result = render_html("```\nplain\n```");
        assert_eq!(result.html, "<pre><code>plain\n</code></pre>");
    }

    #[test]
    fn test_live_block_without_processor_is_plain_code() {
        let result = render_html("```jsx live\nrender(1);\n```");
        assert!(result.html.starts_with("<pre><code class=\"language-jsx\">"));
    }

    #[test]
    fn test_live_block_with_processor() {
        let result = MarkdownRenderer::new()
            .with_processor(LivePlayground::new())
            .render_markdown("Intro\n\n```jsx live\nrender(<b>1</b>);\n```\n\nAfter");
        assert!(result.html.starts_with("<p>Intro</p>"));
        assert!(result.html.contains("live-playground"));
        assert!(result.html.contains("render(&lt;b&gt;1&lt;/b&gt;);"));
        assert!(result.html.ends_with("<p>After</p>"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_processor_warnings_are_collected() {
        let result = MarkdownRenderer::new()
            .with_processor(LivePlayground::new())
            .render_markdown("```jsx live mode=weird\nx\n```");
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_lists() {
        let result = render_html("- one\n- two\n\n1. first\n2. second");
        assert_eq!(
            result.html,
            "<ul><li>one</li><li>two</li></ul><ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn test_table() {
        let result = render_html("| Method | Finds NaN? |\n| --- | :---: |\n| `includes()` | Yes |");
        assert_eq!(
            result.html,
            "<table><thead><tr><th>Method</th><th style=\"text-align:center\">Finds NaN?</th></tr></thead>\
             <tbody><tr><td><code>includes()</code></td><td style=\"text-align:center\">Yes</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_link_is_escaped() {
        let result = render_html("[MDN](https://developer.mozilla.org/?a=1&b=2)");
        assert_eq!(
            result.html,
            r#"<p><a href="https://developer.mozilla.org/?a=1&amp;b=2">MDN</a></p>"#
        );
    }

    #[test]
    fn test_image_alt_text() {
        let result = render_html("![a *diagram*](flow.png)");
        assert_eq!(result.html, r#"<p><img src="flow.png" alt="a diagram"></p>"#);
    }

    #[test]
    fn test_soft_break_kept() {
        let result = render_html("line one\nline two");
        assert_eq!(result.html, "<p>line one\nline two</p>");
    }
}
