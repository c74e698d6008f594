//! HTML templates for site pages.
//!
//! Each view performs its own catalog lookup and writes into a shared
//! `String` buffer. Text is HTML-escaped; ids used in URLs are
//! percent-encoded first.

mod feature;
mod home;
mod layout;
mod navbar;
mod sidebar;
mod version;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

pub(crate) use feature::render_feature_section;
pub(crate) use home::render_home;
pub(crate) use layout::{PageShell, render_document, render_not_found};
pub(crate) use navbar::render_navbar;
pub(crate) use sidebar::render_sidebar;
pub(crate) use version::render_version;

pub(crate) use esdocs_renderer::escape_html as escape;

/// Heading shown when a version id is not in the catalog.
pub const FALLBACK_TITLE: &str = "JavaScript Features";

/// Characters that must be escaped in a URL fragment.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'%')
    .add(b'#');

/// Characters that must be escaped in a single path segment.
const SEGMENT: &AsciiSet = &FRAGMENT.add(b'?').add(b'/').add(b'{').add(b'}');

/// `#id` link to a feature section.
#[must_use]
pub fn fragment_href(id: &str) -> String {
    format!("#{}", utf8_percent_encode(id, FRAGMENT))
}

/// `/es/{id}` link to a version page.
#[must_use]
pub fn version_href(id: &str) -> String {
    format!("/es/{}", utf8_percent_encode(id, SEGMENT))
}
