//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_client;
pub mod engine_installer;
pub mod evaluation_engine;
pub mod file_system;

pub use catalog_client::{CatalogClient, CatalogError};
pub use engine_installer::{EngineInstaller, InstallError};
pub use evaluation_engine::{EngineError, EvaluationEngine};
pub use file_system::{FileSystem, FsError, FsResult};
