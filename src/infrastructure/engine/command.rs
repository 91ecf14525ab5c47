//! Command-line Evaluation Engine
//!
//! Runs the engine binary (InSpec by default) as a child process and reads
//! the JSON report from its stdout.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{EngineError, EvaluationEngine};

/// Placeholder replaced by the archive path in the argument template.
pub const ARCHIVE_PLACEHOLDER: &str = "{archive}";

/// Exit code when at least one control failed. The run itself succeeded.
const EXIT_FAILED_CONTROLS: i32 = 100;
/// Exit code when controls were skipped but none failed.
const EXIT_SKIPPED_CONTROLS: i32 = 101;

pub fn default_args() -> Vec<String> {
    ["exec", ARCHIVE_PLACEHOLDER, "--format", "json"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub struct CommandEngine {
    command: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    fn args_for(&self, archive: &Path) -> Vec<String> {
        let archive = archive.to_string_lossy();
        self.args
            .iter()
            .map(|arg| arg.replace(ARCHIVE_PLACEHOLDER, &archive))
            .collect()
    }
}

impl EvaluationEngine for CommandEngine {
    fn name(&self) -> &str {
        &self.command
    }

    fn run_profile(&self, archive: &Path) -> Result<serde_json::Value, EngineError> {
        let args = self.args_for(archive);
        tracing::debug!(command = %self.command, ?args, "running evaluation engine");

        let output = Command::new(&self.command)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| EngineError::Spawn {
                command: self.command.clone(),
                message: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);

        match output.status.code() {
            Some(0) | Some(EXIT_FAILED_CONTROLS) | Some(EXIT_SKIPPED_CONTROLS) => {
                parse_report(&stdout).map_err(|message| EngineError::MalformedReport { message })
            }
            code => Err(EngineError::Validation {
                message: describe_failure(code, &output.stderr),
                partial: parse_report(&stdout).ok(),
            }),
        }
    }
}

/// The report is the whole of stdout; older engines print banner lines first,
/// in which case the last line carries the JSON.
fn parse_report(stdout: &str) -> Result<serde_json::Value, String> {
    let trimmed = stdout.trim();
    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(whole_err) => trimmed
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
            .and_then(|line| serde_json::from_str(line.trim()).ok())
            .ok_or_else(|| whole_err.to_string()),
    }
}

fn describe_failure(code: Option<i32>, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let detail = stderr.trim().lines().last().unwrap_or("no diagnostic output");
    match code {
        Some(code) => format!("engine exited with code {}: {}", code, detail),
        None => format!("engine terminated by signal: {}", detail),
    }
}
