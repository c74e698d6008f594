//! State structs that track context while rendering markdown events.

use std::collections::HashMap;

use pulldown_cmark::Alignment;

/// State for tracking code block rendering.
#[derive(Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    /// Start a new code block with optional language.
    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.buffer.clear();
    }

    /// End the current code block and return (language, content).
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.buffer))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// State for tracking table rendering.
#[derive(Default)]
pub(crate) struct TableState {
    in_head: bool,
    alignments: Vec<Alignment>,
    cell_index: usize,
}

impl TableState {
    /// Start a new table with column alignments.
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell_index = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell_index = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn start_row(&mut self) {
        self.cell_index = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell_index += 1;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    /// Get the alignment style for the current cell.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell_index) {
            Some(Alignment::Left) => r#" style="text-align:left""#,
            Some(Alignment::Center) => r#" style="text-align:center""#,
            Some(Alignment::Right) => r#" style="text-align:right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// State for tracking headings and generating unique anchor ids.
///
/// Feature bodies are embedded side by side on one page, so every id is
/// prefixed with the owning feature's slug.
#[derive(Default)]
pub(crate) struct HeadingState {
    prefix: Option<String>,
    current_level: Option<u8>,
    text: String,
    html: String,
    id_counts: HashMap<String, usize>,
}

impl HeadingState {
    pub(crate) fn with_prefix(prefix: Option<String>) -> Self {
        Self {
            prefix,
            ..Self::default()
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.current_level.is_some()
    }

    pub(crate) fn start_heading(&mut self, level: u8) {
        self.current_level = Some(level);
        self.text.clear();
        self.html.clear();
    }

    /// Complete the heading. Returns (level, id, html) or `None` if not in a heading.
    pub(crate) fn complete_heading(&mut self) -> Option<(u8, String, String)> {
        let level = self.current_level.take()?;
        let text = std::mem::take(&mut self.text);
        let html = std::mem::take(&mut self.html);
        let id = self.generate_id(&text);
        Some((level, id, html))
    }

    fn generate_id(&mut self, text: &str) -> String {
        let slug = slugify(text);
        let base_id = match &self.prefix {
            Some(prefix) if slug.is_empty() => prefix.clone(),
            Some(prefix) => format!("{prefix}-{slug}"),
            None => slug,
        };
        let count = self.id_counts.entry(base_id.clone()).or_default();
        let id = match *count {
            0 => base_id,
            n => format!("{base_id}-{n}"),
        };
        *count += 1;
        id
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true;

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
