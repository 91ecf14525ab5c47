//! Compliance Report Entity
//!
//! Wraps the evaluation engine's raw results together with how the run went.
//! A run that the engine rejected part-way is still reported, but flagged as
//! a partial failure so the signal is not lost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReportStatus {
    /// The engine ran every control it was given.
    Complete,
    /// The engine raised a validation error; `results` may be empty or partial.
    PartialFailure { message: String },
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Complete => "complete",
            ReportStatus::PartialFailure { .. } => "partial_failure",
        }
    }
}

/// Report persisted next to the profile archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// `owner/name` of the profile that produced it.
    pub profile: String,
    pub status: ReportStatus,
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    /// Engine output, kept verbatim.
    #[serde(default)]
    pub results: serde_json::Value,
}

impl Report {
    pub fn complete(profile: impl Into<String>, results: serde_json::Value) -> Self {
        Self {
            profile: profile.into(),
            status: ReportStatus::Complete,
            generated_at: Utc::now(),
            engine_version: None,
            results,
        }
    }

    pub fn partial_failure(
        profile: impl Into<String>,
        message: impl Into<String>,
        results: serde_json::Value,
    ) -> Self {
        Self {
            profile: profile.into(),
            status: ReportStatus::PartialFailure {
                message: message.into(),
            },
            generated_at: Utc::now(),
            engine_version: None,
            results,
        }
    }

    pub fn with_engine_version(mut self, version: Option<String>) -> Self {
        self.engine_version = version;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.status == ReportStatus::Complete
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
