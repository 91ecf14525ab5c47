//! Profile Runner
//!
//! Ties fetch and execute together behind the settings they share, and runs
//! configured profiles in order.

use std::path::PathBuf;

use serde::Serialize;

use super::execute::{ExecuteOptions, ExecuteOutcome, ExecuteUseCase};
use super::fetch::{FetchOptions, FetchOutcome, FetchUseCase};
use crate::domain::ports::{CatalogClient, EvaluationEngine, FileSystem};
use crate::domain::value_objects::ProfileReference;
use crate::error::ComplianceResult;

/// Settings shared by both operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerSettings {
    pub cache_root: PathBuf,
    pub raise_if_unreachable: bool,
    pub raise_if_not_present: bool,
    pub staging_dir: Option<PathBuf>,
}

impl RunnerSettings {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            cache_root: self.cache_root.clone(),
            raise_if_unreachable: self.raise_if_unreachable,
            staging_dir: self.staging_dir.clone(),
        }
    }

    pub fn execute_options(&self) -> ExecuteOptions {
        ExecuteOptions {
            cache_root: self.cache_root.clone(),
            raise_if_not_present: self.raise_if_not_present,
        }
    }
}

/// Result of fetch + execute for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRun {
    pub profile: String,
    pub fetch: FetchOutcome,
    pub execute: ExecuteOutcome,
}

pub struct ProfileRunner<C, E, F>
where
    C: CatalogClient,
    E: EvaluationEngine,
    F: FileSystem,
{
    fetcher: FetchUseCase<C, F>,
    executor: ExecuteUseCase<E, F>,
    settings: RunnerSettings,
}

impl<C, E, F> ProfileRunner<C, E, F>
where
    C: CatalogClient,
    E: EvaluationEngine,
    F: FileSystem,
{
    pub fn new(
        fetcher: FetchUseCase<C, F>,
        executor: ExecuteUseCase<E, F>,
        settings: RunnerSettings,
    ) -> Self {
        Self {
            fetcher,
            executor,
            settings,
        }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    pub fn fetch(&self, profile: &ProfileReference) -> ComplianceResult<FetchOutcome> {
        self.fetcher.fetch(profile, &self.settings.fetch_options())
    }

    pub fn execute(&self, profile: &ProfileReference) -> ComplianceResult<ExecuteOutcome> {
        self.executor
            .execute(profile, &self.settings.execute_options())
    }

    /// Fetch, then execute.
    pub fn run(&self, profile: &ProfileReference) -> ComplianceResult<ProfileRun> {
        let fetch = self.fetch(profile)?;
        let execute = self.execute(profile)?;
        Ok(ProfileRun {
            profile: profile.slug(),
            fetch,
            execute,
        })
    }

    /// Run every profile in order, stopping at the first fatal error.
    pub fn run_all(&self, profiles: &[ProfileReference]) -> ComplianceResult<Vec<ProfileRun>> {
        let mut runs = Vec::with_capacity(profiles.len());
        for profile in profiles {
            runs.push(self.run(profile)?);
        }
        Ok(runs)
    }
}
