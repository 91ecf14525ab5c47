//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - HTTP client for the profile catalog
//! - `engine/` - Evaluation engine process and installer
//! - `fs/` - Local file system

pub mod catalog;
pub mod engine;
pub mod fs;

// Re-export for convenience
pub use catalog::{HttpCatalogClient, HttpOptions};
pub use engine::{CommandEngine, GemInstaller};
pub use fs::LocalFs;
