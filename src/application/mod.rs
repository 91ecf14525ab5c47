//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `FetchUseCase` - Download a profile archive into the cache
//! - `ExecuteUseCase` - Run an archive through the engine and persist the report
//! - `ProfileRunner` - Both of the above behind shared settings
//! - `provision_engine` - Install the pinned engine once at startup

pub mod execute;
pub mod fetch;
pub mod provision;
pub mod runner;

pub use execute::{ExecuteOptions, ExecuteOutcome, ExecuteUseCase};
pub use fetch::{FetchOptions, FetchOutcome, FetchUseCase};
pub use provision::{provision_engine, EngineStatus};
pub use runner::{ProfileRun, ProfileRunner, RunnerSettings};
