//! Engine Installer Port

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("installer '{command}' could not be launched: {message}")]
    Spawn { command: String, message: String },

    #[error("installing {package} {version} failed: {message}")]
    Failed {
        package: String,
        version: String,
        message: String,
    },
}

/// Installs the evaluation engine at a pinned version.
pub trait EngineInstaller {
    /// Install or upgrade `package` to exactly `version`. Safe to repeat.
    fn ensure_installed(&self, package: &str, version: &str) -> Result<(), InstallError>;

    /// Version of the engine that will actually run, if it can be determined.
    fn installed_version(&self) -> Option<String>;
}
