//! Catalog data model: versions, features and their content.

use std::fmt;
use std::sync::{Arc, OnceLock};

use esdocs_renderer::{LivePlayground, MarkdownRenderer, slugify};

/// Rendered HTML fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap an HTML string that is already safe to embed.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Markup {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A producer of feature body markup.
///
/// Closures returning [`Markup`] implement this trait, so code-defined
/// catalogs can supply bodies without a wrapper type.
pub trait Renderable: Send + Sync {
    fn render(&self) -> Markup;
}

impl<F> Renderable for F
where
    F: Fn() -> Markup + Send + Sync,
{
    fn render(&self) -> Markup {
        self()
    }
}

/// Markdown body of a feature, rendered on first use.
///
/// Heading anchors are prefixed with the owning feature's slug and `jsx live`
/// fences become playground blocks.
pub struct MarkdownBody {
    feature_id: String,
    source: String,
    html: OnceLock<Markup>,
}

impl MarkdownBody {
    #[must_use]
    pub fn new(feature_id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            feature_id: feature_id.into(),
            source: source.into(),
            html: OnceLock::new(),
        }
    }

    /// Markdown source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    fn render_markdown(&self) -> Markup {
        let result = MarkdownRenderer::new()
            .with_id_prefix(slugify(&self.feature_id))
            .with_processor(LivePlayground::new())
            .render_markdown(&self.source);
        for warning in &result.warnings {
            tracing::warn!(feature = %self.feature_id, "{warning}");
        }
        Markup::from(result.html)
    }
}

impl Renderable for MarkdownBody {
    fn render(&self) -> Markup {
        self.html.get_or_init(|| self.render_markdown()).clone()
    }
}

/// Content of a feature section.
#[derive(Clone)]
pub enum FeatureContent {
    /// No authored content yet; pages show a placeholder.
    Pending,
    /// Body markup produced on demand.
    Rendered(Arc<dyn Renderable>),
}

impl FeatureContent {
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Debug for FeatureContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Rendered(_) => f.write_str("Rendered(..)"),
        }
    }
}

/// A single documented language feature.
#[derive(Clone, Debug)]
pub struct FeatureEntry {
    /// Identifier unique within the owning version, used as in-page anchor.
    pub id: String,
    /// Label for navigation links and the section heading.
    pub title: String,
    pub content: FeatureContent,
}

impl FeatureEntry {
    /// Feature without authored content.
    #[must_use]
    pub fn pending(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: FeatureContent::Pending,
        }
    }

    /// Feature whose body is produced by `body`.
    #[must_use]
    pub fn rendered(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Renderable + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: FeatureContent::Rendered(Arc::new(body)),
        }
    }

    /// Feature with a markdown body.
    #[must_use]
    pub fn markdown(
        id: impl Into<String>,
        title: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let body = MarkdownBody::new(id.clone(), source);
        Self::rendered(id, title, body)
    }
}

/// Entry of the navigation sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionEntry {
    /// Routing key, e.g. `es2015`.
    pub id: String,
    /// Navigation label, e.g. `ES2015 (ES6)`.
    pub name: String,
}

impl VersionEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Page title and ordered features of one version.
#[derive(Clone, Debug)]
pub struct VersionRecord {
    pub name: String,
    pub features: Vec<FeatureEntry>,
}
