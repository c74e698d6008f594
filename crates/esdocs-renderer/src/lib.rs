//! Markdown renderer for esdocs feature bodies.
//!
//! This crate provides [`MarkdownRenderer`], which turns the markdown body of a
//! catalog feature into HTML. Special code blocks are handled by
//! [`CodeBlockProcessor`] implementations; [`LivePlayground`] turns
//! `jsx live` fences into markup for the client-side code playground.
//!
//! # Example
//!
//! ```
//! use esdocs_renderer::{LivePlayground, MarkdownRenderer};
//!
//! let markdown = "Arrow functions are **short**.\n\n```jsx live\nrender(<p>hi</p>);\n```";
//! let result = MarkdownRenderer::new()
//!     .with_id_prefix("arrow-functions")
//!     .with_processor(LivePlayground::new())
//!     .render_markdown(markdown);
//!
//! assert!(result.html.contains("live-playground"));
//! ```

mod code_block;
mod playground;
mod renderer;
mod state;

pub use code_block::{CodeBlockProcessor, ProcessResult};
pub use playground::{LivePlayground, PlaygroundMode};
pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{escape_html, slugify};
