//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COMPLIANCE_*)
//! 3. `--config PATH`, else user config (~/.config/compliance/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{apply_overrides, user_config_path, with_env_overrides, ConfigWarning};
pub use types::{AuditConfig, CatalogConfig, Config, EngineConfig, ProfileEntry};
