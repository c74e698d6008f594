//! Stylesheet and client script for esdocs pages.
//!
//! - **`embed` feature on**: assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: assets are read from this crate's `static/`
//!   directory at runtime, so edits show up without a rebuild

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "static/"]
struct Assets;

#[cfg(not(feature = "embed"))]
const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Get an asset by path relative to `static/`.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path relative to `static/`.
///
/// Paths with `..` or absolute components are rejected.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    let relative = Path::new(path);
    let is_safe = relative
        .components()
        .all(|c| matches!(c, std::path::Component::Normal(_)));
    if path.is_empty() || !is_safe {
        return None;
    }
    std::fs::read(Path::new(STATIC_DIR).join(relative))
        .ok()
        .map(Cow::Owned)
}

/// Iterate all asset paths.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all asset paths.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    let mut paths = Vec::new();
    walk_dir(Path::new(STATIC_DIR), Path::new(STATIC_DIR), &mut paths);
    paths.sort();
    paths.into_iter().map(Cow::Owned)
}

/// MIME type for the given file path.
pub fn mime_for(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or("application/octet-stream")
}

#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir(base, &path, result);
        } else if let Ok(rel) = path.strip_prefix(base) {
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
