use std::path::{Path, PathBuf};

use esdocs_catalog::CatalogError;
use esdocs_site::Site;

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Version id cannot be used as a directory name.
    #[error("Version id '{0}' cannot be exported as a directory")]
    UnsafeVersionId(String),
    #[error("Asset listed but not readable: {0}")]
    MissingAsset(String),
}

/// What a build wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// HTML files, including the home and 404 pages.
    pub pages: usize,
    pub assets: usize,
}

/// Builds a static copy of the site.
pub struct StaticSiteBuilder {
    site: Site,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self { site }
    }

    /// Validate the catalog and write every page and asset to `output_dir`.
    ///
    /// Existing files are overwritten; unrelated files are left in place.
    pub fn build(&self, output_dir: &Path) -> Result<ExportSummary, ExportError> {
        let report = self.site.catalog().validate().into_result()?;
        for notice in report.notices() {
            tracing::warn!("{notice}");
        }

        let mut summary = ExportSummary::default();
        create_dir(output_dir)?;

        write_file(&output_dir.join("index.html"), self.site.render_home().as_bytes())?;
        write_file(
            &output_dir.join("404.html"),
            self.site.render_not_found().as_bytes(),
        )?;
        summary.pages += 2;

        for version_id in self.version_ids() {
            if !is_safe_dir_name(&version_id) {
                return Err(ExportError::UnsafeVersionId(version_id));
            }
            let dir = output_dir.join("es").join(&version_id);
            create_dir(&dir)?;
            let html = self.site.render_version(&version_id);
            write_file(&dir.join("index.html"), html.as_bytes())?;
            tracing::debug!(version_id, "Exported version page");
            summary.pages += 1;
        }

        let assets_dir = output_dir.join("assets");
        for path in esdocs_assets::iter() {
            let data = esdocs_assets::get(&path)
                .ok_or_else(|| ExportError::MissingAsset(path.to_string()))?;
            let target = assets_dir.join(path.as_ref());
            if let Some(parent) = target.parent() {
                create_dir(parent)?;
            }
            write_file(&target, &data)?;
            summary.assets += 1;
        }

        tracing::info!(
            output = %output_dir.display(),
            pages = summary.pages,
            assets = summary.assets,
            "Static site exported"
        );
        Ok(summary)
    }

    /// Navigation entries in order, then unlisted versions sorted by id.
    fn version_ids(&self) -> Vec<String> {
        let catalog = self.site.catalog();
        let mut ids: Vec<String> = catalog.navigation().iter().map(|e| e.id.clone()).collect();
        let mut unlisted: Vec<String> = catalog
            .version_ids()
            .filter(|id| !ids.iter().any(|listed| listed.as_str() == *id))
            .map(str::to_owned)
            .collect();
        unlisted.sort();
        ids.extend(unlisted);
        ids
    }
}

fn is_safe_dir_name(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '\0', '?', '#'])
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, data).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use esdocs_catalog::{Catalog, FeatureEntry};
    use esdocs_site::SiteOptions;
    use pretty_assertions::assert_eq;

    use super::*;

    fn builder(catalog: Catalog) -> StaticSiteBuilder {
        StaticSiteBuilder::new(Site::new(Arc::new(catalog), SiteOptions::default()))
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_build_bundled_site() {
        let dir = tempfile::tempdir().unwrap();
        let summary = builder(Catalog::bundled().unwrap())
            .build(dir.path())
            .unwrap();

        assert_eq!(summary.pages, 12);
        assert!(summary.assets >= 2);

        let home = read(&dir.path().join("index.html"));
        assert_eq!(home.matches("class=\"version-card\"").count(), 10);

        let es2015 = read(&dir.path().join("es/es2015/index.html"));
        assert_eq!(es2015.matches("<section ").count(), 14);


        assert!(dir.path().join("assets/styles.css").exists());
        assert!(dir.path().join("assets/app.js").exists());
    }

    #[test]
    fn test_not_found_page_serves_unknown_versions() {
        let dir = tempfile::tempdir().unwrap();
        builder(Catalog::bundled().unwrap())
            .build(dir.path())
            .unwrap();

        let not_found = read(&dir.path().join("404.html"));
        // Unknown /es/{id}: the page itself is the fallback shell.
        assert!(not_found.contains("<h1>JavaScript Features</h1>"));
        assert_eq!(not_found.matches("<section ").count(), 0);
        assert!(not_found.contains("data-scroll-reset=\"top\""));
        // Any other path: replaced with the home page.
        assert!(not_found.contains(
            r#"if (!/^\/es\/[^\/]+\/?$/.test(location.pathname)) location.replace("/");"#
        ));
    }

    #[test]
    fn test_unlisted_versions_are_exported() {
        let catalog = Catalog::builder()
            .navigation_entry("es2015", "ES2015")
            .version("es2015", "ES2015", vec![FeatureEntry::pending("a", "A")])
            .version("draft", "Draft", Vec::new())
            .build();
        let dir = tempfile::tempdir().unwrap();
        let summary = builder(catalog).build(dir.path()).unwrap();

        assert_eq!(summary.pages, 4);
        assert!(dir.path().join("es/draft/index.html").exists());
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let catalog = Catalog::builder().navigation_entry("es2099", "ES2099").build();
        let dir = tempfile::tempdir().unwrap();
        let err = builder(catalog).build(dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::Catalog(CatalogError::Invalid(_))));
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_unsafe_version_id_is_rejected() {
        let catalog = Catalog::builder()
            .navigation_entry("../escape", "Escape")
            .version("../escape", "Escape", Vec::new())
            .build();
        let dir = tempfile::tempdir().unwrap();
        let err = builder(catalog).build(dir.path()).unwrap_err();
        assert!(matches!(err, ExportError::UnsafeVersionId(id) if id == "../escape"));
    }

    #[test]
    fn test_is_safe_dir_name() {
        assert!(is_safe_dir_name("es2015"));
        assert!(is_safe_dir_name("es 2015"));
        assert!(!is_safe_dir_name(""));
        assert!(!is_safe_dir_name(".."));
        assert!(!is_safe_dir_name("a/b"));
    }
}
