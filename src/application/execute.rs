//! Execute Use Case
//!
//! Runs a cached (or locally supplied) profile archive through the evaluation
//! engine and persists the report.
//!
//! A missing archive is a no-op unless `raise_if_not_present` is set. Engine
//! validation failures never abort the run: they are logged and recorded in
//! the report as a partial failure.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::{Report, ReportStatus};
use crate::domain::ports::{EngineError, EvaluationEngine, FileSystem};
use crate::domain::value_objects::ProfileReference;
use crate::error::{ComplianceError, ComplianceResult};

/// Options for an execution.
#[derive(Debug, Clone)]
pub struct ExecuteOptions {
    pub cache_root: PathBuf,
    /// Fail instead of skipping when the archive is missing.
    pub raise_if_not_present: bool,
}

/// What an execution did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ExecuteOutcome {
    /// A report was written to `report_path`.
    Reported {
        report_path: PathBuf,
        status: ReportStatus,
    },
    /// No archive at `archive`; nothing ran.
    Skipped { archive: PathBuf },
}

pub struct ExecuteUseCase<E: EvaluationEngine, F: FileSystem> {
    engine: E,
    fs: F,
    engine_version: Option<String>,
}

impl<E: EvaluationEngine, F: FileSystem> ExecuteUseCase<E, F> {
    pub fn new(engine: E, fs: F) -> Self {
        Self {
            engine,
            fs,
            engine_version: None,
        }
    }

    /// Record the engine version in every report.
    pub fn with_engine_version(mut self, version: Option<String>) -> Self {
        self.engine_version = version;
        self
    }

    pub fn execute(
        &self,
        profile: &ProfileReference,
        options: &ExecuteOptions,
    ) -> ComplianceResult<ExecuteOutcome> {
        let archive = profile.archive_path(&options.cache_root);

        if !self.fs.exists(&archive) {
            tracing::warn!(path = %archive.display(), "no such file: {}", archive.display());
            if options.raise_if_not_present {
                return Err(ComplianceError::ProfileNotPresent { path: archive });
            }
            return Ok(ExecuteOutcome::Skipped { archive });
        }

        let report_path = profile.report_path(&options.cache_root);
        let slug = profile.slug();
        tracing::info!(profile = %slug, engine = self.engine.name(), "execute compliance profile");

        let report = match self.engine.run_profile(&archive) {
            Ok(results) => Report::complete(&slug, results),
            Err(EngineError::Validation { message, partial }) => {
                tracing::warn!(profile = %slug, "engine validation failed: {}", message);
                Report::partial_failure(&slug, message, partial.unwrap_or_default())
            }
            Err(err) => return Err(err.into()),
        }
        .with_engine_version(self.engine_version.clone());

        // Report content is sensitive: only its location and status are logged.
        self.fs.write_atomic(&report_path, report.to_json()?.as_bytes())?;
        tracing::info!(
            path = %report_path.display(),
            status = report.status.label(),
            "compliance report written"
        );

        Ok(ExecuteOutcome::Reported {
            report_path,
            status: report.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::LocalFs;
    use serde_json::json;
    use std::cell::RefCell;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    enum Behaviour {
        Succeed(serde_json::Value),
        RejectWith(Option<serde_json::Value>),
        Crash,
    }

    struct MockEngine {
        behaviour: Behaviour,
        runs: RefCell<Vec<PathBuf>>,
    }

    impl MockEngine {
        fn new(behaviour: Behaviour) -> Self {
            Self {
                behaviour,
                runs: RefCell::new(Vec::new()),
            }
        }
    }

    impl EvaluationEngine for MockEngine {
        fn name(&self) -> &str {
            "mock"
        }

        fn run_profile(&self, archive: &Path) -> Result<serde_json::Value, EngineError> {
            self.runs.borrow_mut().push(archive.to_path_buf());
            match &self.behaviour {
                Behaviour::Succeed(value) => Ok(value.clone()),
                Behaviour::RejectWith(partial) => Err(EngineError::Validation {
                    message: "control ssh-4 is invalid".into(),
                    partial: partial.clone(),
                }),
                Behaviour::Crash => Err(EngineError::MalformedReport {
                    message: "not json".into(),
                }),
            }
        }
    }

    fn options(cache: &TempDir, raise_if_not_present: bool) -> ExecuteOptions {
        ExecuteOptions {
            cache_root: cache.path().to_path_buf(),
            raise_if_not_present,
        }
    }

    fn seed_archive(cache: &TempDir) -> PathBuf {
        let archive = cache.path().join("compliance").join("base_ssh.tgz");
        std::fs::create_dir_all(archive.parent().unwrap()).unwrap();
        std::fs::write(&archive, "tarball").unwrap();
        archive
    }

    fn report_path(cache: &TempDir) -> PathBuf {
        cache.path().join("compliance").join("base_ssh_report.json")
    }

    #[test]
    fn missing_archive_is_skipped_by_default() {
        let cache = tempdir().unwrap();
        let execute = ExecuteUseCase::new(MockEngine::new(Behaviour::Crash), LocalFs::new());

        let outcome = execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, false))
            .unwrap();

        assert_eq!(
            outcome,
            ExecuteOutcome::Skipped {
                archive: cache.path().join("compliance").join("base_ssh.tgz")
            }
        );
        assert!(!report_path(&cache).exists());
        assert!(execute.engine.runs.borrow().is_empty());
    }

    #[test]
    fn missing_archive_raises_when_configured() {
        let cache = tempdir().unwrap();
        let execute = ExecuteUseCase::new(MockEngine::new(Behaviour::Crash), LocalFs::new());

        let err = execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, true))
            .unwrap_err();

        let missing = cache.path().join("compliance").join("base_ssh.tgz");
        assert!(matches!(err, ComplianceError::ProfileNotPresent { ref path } if *path == missing));
        assert!(err.to_string().contains(&missing.display().to_string()));
    }

    #[test]
    fn successful_run_writes_parseable_report() {
        let cache = tempdir().unwrap();
        let archive = seed_archive(&cache);
        let results = json!({"controls": [{"id": "ssh-1", "status": "passed"}]});
        let execute = ExecuteUseCase::new(
            MockEngine::new(Behaviour::Succeed(results.clone())),
            LocalFs::new(),
        )
        .with_engine_version(Some("0.15.0".into()));

        let outcome = execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, true))
            .unwrap();

        assert_eq!(
            outcome,
            ExecuteOutcome::Reported {
                report_path: report_path(&cache),
                status: ReportStatus::Complete,
            }
        );
        assert_eq!(execute.engine.runs.borrow().as_slice(), [archive]);

        let report =
            Report::from_json(&std::fs::read_to_string(report_path(&cache)).unwrap()).unwrap();
        assert_eq!(report.profile, "base/ssh");
        assert_eq!(report.results, results);
        assert_eq!(report.engine_version.as_deref(), Some("0.15.0"));
    }

    #[test]
    fn validation_failure_is_recorded_not_raised() {
        let cache = tempdir().unwrap();
        seed_archive(&cache);
        let execute = ExecuteUseCase::new(
            MockEngine::new(Behaviour::RejectWith(Some(json!({"controls": []})))),
            LocalFs::new(),
        );

        let outcome = execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, true))
            .unwrap();

        let expected_status = ReportStatus::PartialFailure {
            message: "control ssh-4 is invalid".into(),
        };
        assert!(matches!(
            outcome,
            ExecuteOutcome::Reported { ref status, .. } if *status == expected_status
        ));

        let report =
            Report::from_json(&std::fs::read_to_string(report_path(&cache)).unwrap()).unwrap();
        assert_eq!(report.status, expected_status);
        assert_eq!(report.results, json!({"controls": []}));
    }

    #[test]
    fn validation_failure_without_output_has_null_results() {
        let cache = tempdir().unwrap();
        seed_archive(&cache);
        let execute = ExecuteUseCase::new(
            MockEngine::new(Behaviour::RejectWith(None)),
            LocalFs::new(),
        );

        execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, false))
            .unwrap();

        let report =
            Report::from_json(&std::fs::read_to_string(report_path(&cache)).unwrap()).unwrap();
        assert_eq!(report.results, serde_json::Value::Null);
        assert!(!report.is_complete());
    }

    #[test]
    fn other_engine_errors_propagate() {
        let cache = tempdir().unwrap();
        seed_archive(&cache);
        let execute = ExecuteUseCase::new(MockEngine::new(Behaviour::Crash), LocalFs::new());

        let err = execute
            .execute(&ProfileReference::new("ssh"), &options(&cache, false))
            .unwrap_err();

        assert!(matches!(
            err,
            ComplianceError::Engine(EngineError::MalformedReport { .. })
        ));
        assert!(!report_path(&cache).exists());
    }

    #[test]
    fn profile_directory_is_run_like_an_archive() {
        let cache = tempdir().unwrap();
        let profile_dir = cache.path().join("ssh-profile");
        std::fs::create_dir_all(&profile_dir).unwrap();
        std::fs::write(profile_dir.join("inspec.yml"), "name: ssh\n").unwrap();
        let execute = ExecuteUseCase::new(
            MockEngine::new(Behaviour::Succeed(json!({"profiles": []}))),
            LocalFs::new(),
        );

        let outcome = execute
            .execute(
                &ProfileReference::new("ssh").with_path(&profile_dir),
                &options(&cache, true),
            )
            .unwrap();

        assert!(matches!(outcome, ExecuteOutcome::Reported { .. }));
        assert_eq!(execute.engine.runs.borrow().as_slice(), [profile_dir]);
        assert!(report_path(&cache).is_file());
    }

    #[test]
    fn explicit_path_is_run_and_report_uses_owner_name() {
        let cache = tempdir().unwrap();
        let local = cache.path().join("elsewhere.tgz");
        std::fs::write(&local, "tarball").unwrap();
        let execute = ExecuteUseCase::new(
            MockEngine::new(Behaviour::Succeed(json!({}))),
            LocalFs::new(),
        );

        execute
            .execute(
                &ProfileReference::new("ssh").with_path(&local),
                &options(&cache, true),
            )
            .unwrap();

        assert_eq!(execute.engine.runs.borrow().as_slice(), [local]);
        assert!(report_path(&cache).exists());
    }
}
