//! Compliance - fetch compliance profiles and run them against this host
//!
//! A profile is downloaded from the catalog server as a tarball into a cache
//! directory, then executed by an external evaluation engine (InSpec by
//! default). The engine's report is persisted next to the archive.
//!
//! ```text
//! <cache_root>/compliance/<owner>_<name>.tgz
//! <cache_root>/compliance/<owner>_<name>_report.json
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ExecuteOutcome, FetchOutcome, ProfileRun, ProfileRunner, RunnerSettings,
};
pub use config::Config;
pub use domain::entities::{Report, ReportStatus};
pub use domain::value_objects::{normalize, ProfileReference, RemoteEndpoint};
pub use error::{ComplianceError, ComplianceResult};
