//! Error types for profile fetch and execution
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{CatalogError, EngineError, FsError};
use crate::domain::value_objects::EndpointError;

/// Result type alias for library operations
pub type ComplianceResult<T> = Result<T, ComplianceError>;

/// Main error type. Anything returned as this is fatal for the resource.
#[derive(Error, Debug)]
pub enum ComplianceError {
    /// Catalog download failed and the failure was not tolerated
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Evaluation engine could not run or produced garbage
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Catalog endpoint configuration is unusable
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// Archive or report I/O
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Archive missing and `raise_if_not_present` is set
    #[error("aborting since profile is not present here: {}", path.display())]
    ProfileNotPresent { path: PathBuf },

    /// Fetch requested without a management server URL
    #[error("no management server URL configured (set `server_url` or COMPLIANCE_SERVER_URL)")]
    NoServerUrl,

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// HTTP client could not be built (TLS backend, proxy settings)
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Report serialization
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
