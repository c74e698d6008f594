//! Routing, navigation model and page rendering for esdocs.
//!
//! [`resolve_route`] maps a URL path to a [`Route`], [`Navigator`] models the
//! history and scroll rules of a browser session, and [`Site`] renders HTML
//! pages from an injected [`Catalog`](esdocs_catalog::Catalog).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use esdocs_catalog::Catalog;
//! use esdocs_site::{RenderedPage, Site, SiteOptions};
//!
//! let site = Site::new(Arc::new(Catalog::empty()), SiteOptions::default());
//! assert!(matches!(site.render_path("/"), RenderedPage::Html(_)));
//! assert!(matches!(site.render_path("/nope"), RenderedPage::Redirect { .. }));
//! ```

mod navigator;
mod router;
mod site;
mod views;

pub use navigator::{NavigationOutcome, Navigator, ScrollPosition};
pub use router::{HistoryMode, Navigation, Route, ScrollAction, VERSION_PREFIX, resolve_route};
pub use site::{RenderedPage, Site, SiteOptions};
pub use views::{FALLBACK_TITLE, fragment_href, version_href};
