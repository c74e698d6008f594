//! Catalog invariant checks.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// How serious a validation issue is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The catalog breaks an invariant and must not be published.
    Error,
    /// The catalog works but something looks unintended.
    Notice,
}

/// Kind of validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    /// Navigation lists a version id with no record.
    DanglingNavigation,
    /// Navigation lists the same version id twice.
    DuplicateNavigation,
    /// Two features of one version share an id.
    DuplicateFeature,
    EmptyId,
    EmptyTitle,
    /// Feature id contains whitespace and needs percent-encoding in links.
    WhitespaceInId,
    /// Version record is not reachable from navigation.
    Unlisted,
}

impl IssueKind {
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::WhitespaceInId | Self::Unlisted => Severity::Notice,
            _ => Severity::Error,
        }
    }
}

/// A single validation finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub kind: IssueKind,
    pub version_id: String,
    pub feature_id: Option<String>,
}

impl ValidationIssue {
    fn version(kind: IssueKind, version_id: &str) -> Self {
        Self {
            kind,
            version_id: version_id.to_owned(),
            feature_id: None,
        }
    }

    fn feature(kind: IssueKind, version_id: &str, feature_id: &str) -> Self {
        Self {
            kind,
            version_id: version_id.to_owned(),
            feature_id: Some(feature_id.to_owned()),
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = &self.version_id;
        let feature = self.feature_id.as_deref().unwrap_or_default();
        match self.kind {
            IssueKind::DanglingNavigation => {
                write!(f, "navigation entry '{version}' has no version record")
            }
            IssueKind::DuplicateNavigation => {
                write!(f, "navigation lists '{version}' more than once")
            }
            IssueKind::DuplicateFeature => {
                write!(f, "duplicate feature id '{feature}' in {version}")
            }
            IssueKind::EmptyId if self.feature_id.is_some() => {
                write!(f, "feature with empty id in {version}")
            }
            IssueKind::EmptyId => f.write_str("version with empty id"),
            IssueKind::EmptyTitle if self.feature_id.is_some() => {
                write!(f, "feature '{feature}' in {version} has an empty title")
            }
            IssueKind::EmptyTitle => write!(f, "version '{version}' has an empty name"),
            IssueKind::WhitespaceInId => {
                write!(f, "feature id '{feature}' in {version} contains whitespace")
            }
            IssueKind::Unlisted => write!(f, "version '{version}' is not listed in navigation"),
        }
    }
}

/// Result of [`Catalog::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    pub fn notices(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Notice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fail with [`CatalogError::Invalid`] if any error-severity issue exists.
    pub fn into_result(self) -> Result<Self, CatalogError> {
        if self.has_errors() {
            Err(CatalogError::Invalid(self))
        } else {
            Ok(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.errors().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

pub(crate) fn validate(catalog: &Catalog) -> ValidationReport {
    let mut issues = Vec::new();

    let mut listed = HashSet::new();
    for entry in catalog.navigation() {
        if entry.id.is_empty() {
            issues.push(ValidationIssue::version(IssueKind::EmptyId, &entry.id));
        }
        if entry.name.trim().is_empty() {
            issues.push(ValidationIssue::version(IssueKind::EmptyTitle, &entry.id));
        }
        if !listed.insert(entry.id.as_str()) {
            issues.push(ValidationIssue::version(
                IssueKind::DuplicateNavigation,
                &entry.id,
            ));
        }
        if catalog.version(&entry.id).is_none() {
            issues.push(ValidationIssue::version(
                IssueKind::DanglingNavigation,
                &entry.id,
            ));
        }
    }

    let mut version_ids: Vec<&str> = catalog.version_ids().collect();
    version_ids.sort_unstable();
    for version_id in version_ids {
        if !listed.contains(version_id) {
            issues.push(ValidationIssue::version(IssueKind::Unlisted, version_id));
        }
        let mut seen = HashSet::new();
        for feature in catalog.features(version_id) {
            let id = feature.id.as_str();
            if id.is_empty() {
                issues.push(ValidationIssue::feature(IssueKind::EmptyId, version_id, id));
            } else if id.chars().any(char::is_whitespace) {
                issues.push(ValidationIssue::feature(
                    IssueKind::WhitespaceInId,
                    version_id,
                    id,
                ));
            }
            if feature.title.trim().is_empty() {
                issues.push(ValidationIssue::feature(
                    IssueKind::EmptyTitle,
                    version_id,
                    id,
                ));
            }
            if !seen.insert(id) {
                issues.push(ValidationIssue::feature(
                    IssueKind::DuplicateFeature,
                    version_id,
                    id,
                ));
            }
        }
    }

    ValidationReport { issues }
}
