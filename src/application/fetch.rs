//! Fetch Use Case
//!
//! Downloads a profile archive from the catalog into the cache.
//!
//! The download is staged in a temp file and only moved onto the archive path
//! once the whole body arrived, so a failed fetch never disturbs the archive a
//! previous run left behind. 401/403 responses may be tolerated (stale cache
//! is acceptable); every other failure is fatal.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::ports::{CatalogClient, CatalogError, FileSystem, FsError};
use crate::domain::value_objects::{ContentHash, EndpointError, ProfileReference, RemoteEndpoint};
use crate::error::{ComplianceError, ComplianceResult};

/// Options for a fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub cache_root: PathBuf,
    /// Propagate 401/403 instead of falling back to the cached archive.
    pub raise_if_unreachable: bool,
    /// Where downloads are staged; the system temp dir when `None`.
    pub staging_dir: Option<PathBuf>,
}

/// What a fetch did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// A fresh archive is now at `path`.
    Downloaded {
        path: PathBuf,
        bytes: u64,
        digest: ContentHash,
    },
    /// The catalog refused the request and the failure was tolerated.
    /// `cached` is the archive a previous run left, if any.
    Skipped { status: u16, cached: Option<PathBuf> },
    /// The profile points at a local archive; nothing to download.
    LocalPath { path: PathBuf },
}

pub struct FetchUseCase<C: CatalogClient, F: FileSystem> {
    client: C,
    fs: F,
    endpoint: Result<Option<RemoteEndpoint>, EndpointError>,
}

impl<C: CatalogClient, F: FileSystem> FetchUseCase<C, F> {
    /// `endpoint` may be absent when only local work is expected; fetching
    /// a catalog profile then fails with [`ComplianceError::NoServerUrl`].
    pub fn new(client: C, fs: F, endpoint: Option<RemoteEndpoint>) -> Self {
        Self::from_resolution(client, fs, Ok(endpoint))
    }

    /// Like [`FetchUseCase::new`], but keeps a failed endpoint resolution.
    /// The error is returned only when a catalog profile is fetched, so local
    /// paths keep working with a broken catalog config.
    pub fn from_resolution(
        client: C,
        fs: F,
        endpoint: Result<Option<RemoteEndpoint>, EndpointError>,
    ) -> Self {
        Self {
            client,
            fs,
            endpoint,
        }
    }

    pub fn fetch(
        &self,
        profile: &ProfileReference,
        options: &FetchOptions,
    ) -> ComplianceResult<FetchOutcome> {
        if let Some(path) = profile.explicit_path() {
            tracing::info!(profile = %profile, path = %path.display(), "profile has a local path, not fetching");
            return Ok(FetchOutcome::LocalPath {
                path: path.to_path_buf(),
            });
        }

        let endpoint = match &self.endpoint {
            Ok(Some(endpoint)) => endpoint,
            Ok(None) => return Err(ComplianceError::NoServerUrl),
            Err(err) => return Err(err.clone().into()),
        };
        let (owner, name) = profile.resolve();
        let url = endpoint.profile_tar_url(&owner, &name);
        let archive = profile.archive_path(&options.cache_root);

        tracing::info!(owner = %owner, name = %name, "fetch compliance profile");

        let mut staged = stage(options)?;
        let downloaded = self
            .client
            .download(&url, endpoint.credentials(), staged.as_file_mut());

        match downloaded {
            Ok(bytes) => {
                staged
                    .as_file()
                    .sync_all()
                    .map_err(|e| FsError::io(staged.path(), e))?;
                let staged = staged.into_temp_path();
                self.fs.replace(&staged, &archive)?;

                let digest = self.fs.hash(&archive)?;
                tracing::info!(
                    path = %archive.display(),
                    bytes,
                    %digest,
                    "profile archive downloaded"
                );
                Ok(FetchOutcome::Downloaded {
                    path: archive,
                    bytes,
                    digest,
                })
            }
            Err(err) if err.is_classified() => self.tolerate(err, &archive, options),
            Err(err) => Err(err.into()),
        }
    }

    fn tolerate(
        &self,
        err: CatalogError,
        archive: &Path,
        options: &FetchOptions,
    ) -> ComplianceResult<FetchOutcome> {
        let status = err.status().unwrap_or_default();
        tracing::error!(status, "{} {}", err, err.diagnosis().unwrap_or_default());
        tracing::error!("profile NOT downloaded, will use cached version if available");

        if options.raise_if_unreachable {
            return Err(err.into());
        }

        let cached = self.fs.exists(archive).then(|| archive.to_path_buf());
        if cached.is_none() {
            tracing::warn!(path = %archive.display(), "no cached archive available either");
        }
        Ok(FetchOutcome::Skipped { status, cached })
    }
}

fn stage(options: &FetchOptions) -> ComplianceResult<tempfile::NamedTempFile> {
    let dir = options
        .staging_dir
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    tempfile::Builder::new()
        .prefix("compliance-profile-")
        .suffix(".tgz")
        .tempfile_in(&dir)
        .map_err(|e| FsError::io(&dir, e).into())
}
