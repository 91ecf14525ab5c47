//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::time::Duration;

use crate::application::{
    provision_engine, EngineStatus, ExecuteUseCase, FetchUseCase, ProfileRunner, RunnerSettings,
};
use crate::config::Config;
use crate::domain::value_objects::{EndpointError, RemoteEndpoint};
use crate::error::{ComplianceError, ComplianceResult};
use crate::infrastructure::{CommandEngine, GemInstaller, HttpCatalogClient, HttpOptions, LocalFs};

/// Type alias for the concrete FetchUseCase with all dependencies
pub type ConcreteFetchUseCase = FetchUseCase<HttpCatalogClient, LocalFs>;

/// Type alias for the concrete ExecuteUseCase with all dependencies
pub type ConcreteExecuteUseCase = ExecuteUseCase<CommandEngine, LocalFs>;

/// Type alias for the concrete ProfileRunner with all dependencies
pub type ConcreteProfileRunner = ProfileRunner<HttpCatalogClient, CommandEngine, LocalFs>;

/// Resolve the catalog endpoint, or `None` when no management server is configured.
pub fn resolve_endpoint(config: &Config) -> Result<Option<RemoteEndpoint>, EndpointError> {
    let Some(server_url) = config.server_url.as_deref() else {
        return Ok(None);
    };

    let endpoint = RemoteEndpoint::resolve(
        server_url,
        config.catalog.server.as_deref(),
        config.catalog.port,
        config.catalog.credentials()?,
    )?;
    Ok(Some(endpoint))
}

/// Runner settings taken from the config's audit policies.
pub fn runner_settings(config: &Config) -> RunnerSettings {
    RunnerSettings {
        cache_root: config.cache_root.clone(),
        raise_if_unreachable: config.audit.raise_if_unreachable,
        raise_if_not_present: config.audit.raise_if_not_present,
        staging_dir: config.staging_dir.clone(),
    }
}

/// Create a fetch use case talking HTTP to the configured catalog
///
/// Catalog settings that fail to resolve only surface when a catalog profile
/// is fetched.
pub fn create_fetch_use_case(config: &Config) -> ComplianceResult<ConcreteFetchUseCase> {
    let options = HttpOptions {
        insecure_skip_verify: config.catalog.insecure_skip_verify,
        timeout: config.catalog.timeout_secs.map(Duration::from_secs),
    };
    let client =
        HttpCatalogClient::new(options).map_err(|e| ComplianceError::HttpClient(e.to_string()))?;

    let endpoint = resolve_endpoint(config);
    if let Err(err) = &endpoint {
        tracing::debug!("catalog endpoint unresolved: {}", err);
    }

    Ok(FetchUseCase::from_resolution(client, LocalFs::new(), endpoint))
}

/// Create an execute use case running the configured engine command
pub fn create_execute_use_case(
    config: &Config,
    engine_version: Option<String>,
) -> ConcreteExecuteUseCase {
    let engine = CommandEngine::new(config.engine.command.clone(), config.engine.args.clone());
    ExecuteUseCase::new(engine, LocalFs::new()).with_engine_version(engine_version)
}

/// Create a profile runner with all dependencies wired up
///
/// This is the main entry point for the CLI. `engine_version` is recorded in
/// every report; pass what [`provision`] found.
pub fn create_profile_runner(
    config: &Config,
    engine_version: Option<String>,
) -> ComplianceResult<ConcreteProfileRunner> {
    Ok(ProfileRunner::new(
        create_fetch_use_case(config)?,
        create_execute_use_case(config, engine_version),
        runner_settings(config),
    ))
}

/// Install the pinned engine with `gem` and report what ended up on the path.
///
/// Returns `None` when `auto_install` is off.
pub fn provision(config: &Config) -> Option<EngineStatus> {
    if !config.engine.auto_install {
        tracing::debug!("engine auto install disabled");
        return None;
    }

    let installer = GemInstaller::new(config.engine.gem.clone(), config.engine.command.clone());
    Some(provision_engine(
        &installer,
        &config.engine.package,
        &config.engine.version,
    ))
}
