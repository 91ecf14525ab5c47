//! Profile Reference Value Object
//!
//! Identifies a compliance profile either by `owner/name` in the catalog or by
//! an archive already sitting on local disk.

use std::path::{Path, PathBuf};

/// Owner used when none is given and the name carries no `owner/` prefix.
pub const DEFAULT_OWNER: &str = "base";

/// Directory under the cache root that holds archives and reports.
pub const COMPLIANCE_DIR: &str = "compliance";

/// Separator between an owner override and the profile name.
pub const OWNER_SEPARATOR: char = '/';

/// Resolve `(owner, name)` for a profile.
///
/// A name of the form `team/baseline` overrides whatever owner was supplied.
/// Otherwise the supplied owner is used, falling back to [`DEFAULT_OWNER`]
/// when it is absent or empty.
///
/// Only the first separator splits: `a/b/c` resolves to owner `a` and name
/// `b/c`. The remaining `/` is kept verbatim, so the catalog URL ends in
/// `.../owners/a/compliance/b/c/tar` and the cached files land one directory
/// deeper, at `compliance/a_b/c.tgz` and `compliance/a_b/c_report.json`.
///
/// Fetch and Execute both go through this function so that the archive they
/// download and the archive they run are always the same file.
pub fn normalize(owner: Option<&str>, name: &str) -> (String, String) {
    if let Some((owner_override, remainder)) = name.split_once(OWNER_SEPARATOR) {
        return (owner_override.to_string(), remainder.to_string());
    }

    let owner = owner
        .filter(|o| !o.is_empty())
        .unwrap_or(DEFAULT_OWNER)
        .to_string();
    (owner, name.to_string())
}

/// An immutable reference to a compliance profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProfileReference {
    owner: Option<String>,
    name: String,
    explicit_path: Option<PathBuf>,
}

impl ProfileReference {
    /// Reference a profile by name (optionally `owner/name`).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            owner: None,
            name: name.into(),
            explicit_path: None,
        }
    }

    /// Set the owner namespace.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Use an archive on disk instead of fetching one.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn explicit_path(&self) -> Option<&Path> {
        self.explicit_path.as_deref()
    }

    /// Normalized `(owner, name)` pair.
    pub fn resolve(&self) -> (String, String) {
        normalize(self.owner.as_deref(), &self.name)
    }

    /// `owner/name` label used in logs and reports.
    pub fn slug(&self) -> String {
        let (owner, name) = self.resolve();
        format!("{}/{}", owner, name)
    }

    /// Where the archive lives: the explicit path if one was given, otherwise
    /// `<cache_root>/compliance/<owner>_<name>.tgz`.
    pub fn archive_path(&self, cache_root: &Path) -> PathBuf {
        if let Some(path) = &self.explicit_path {
            return path.clone();
        }
        let (owner, name) = self.resolve();
        cache_root
            .join(COMPLIANCE_DIR)
            .join(format!("{}_{}.tgz", owner, name))
    }

    /// Where the report is written: `<cache_root>/compliance/<owner>_<name>_report.json`.
    ///
    /// An explicit archive path does not move the report.
    pub fn report_path(&self, cache_root: &Path) -> PathBuf {
        let (owner, name) = self.resolve();
        cache_root
            .join(COMPLIANCE_DIR)
            .join(format!("{}_{}_report.json", owner, name))
    }
}

impl std::fmt::Display for ProfileReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}
