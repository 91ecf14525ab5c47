//! Evaluation Engine Port
//!
//! The external tool that runs a profile's controls and produces a report.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be started at all.
    #[error("failed to launch evaluation engine '{command}': {message}")]
    Spawn { command: String, message: String },

    /// The engine rejected the profile part-way through.
    ///
    /// `partial` holds whatever results it managed to emit.
    #[error("profile validation failed: {message}")]
    Validation {
        message: String,
        partial: Option<serde_json::Value>,
    },

    /// The engine claimed success but its output was not a report.
    #[error("evaluation engine produced an unreadable report: {message}")]
    MalformedReport { message: String },
}

pub trait EvaluationEngine {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Run the profile archive at `archive` with reporting enabled.
    ///
    /// Blocks until the engine exits; there is no timeout.
    fn run_profile(&self, archive: &Path) -> Result<serde_json::Value, EngineError>;
}
