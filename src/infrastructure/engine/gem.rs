//! RubyGems Engine Installer
//!
//! Installs the engine gem at the pinned version and asks the engine binary
//! which version it actually is. Old gems left on the `PATH` can shadow the
//! freshly installed one, which is what the version check catches.

use std::process::{Command, Stdio};

use crate::domain::ports::{EngineInstaller, InstallError};

pub struct GemInstaller {
    gem: String,
    engine_command: String,
}

impl GemInstaller {
    pub fn new(gem: impl Into<String>, engine_command: impl Into<String>) -> Self {
        Self {
            gem: gem.into(),
            engine_command: engine_command.into(),
        }
    }
}

impl EngineInstaller for GemInstaller {
    fn ensure_installed(&self, package: &str, version: &str) -> Result<(), InstallError> {
        tracing::info!(package, version, "install/update evaluation engine");

        let output = Command::new(&self.gem)
            .args(["install", package, "--version", version, "--no-document"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| InstallError::Spawn {
                command: self.gem.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(InstallError::Failed {
                package: package.to_string(),
                version: version.to_string(),
                message: stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    fn installed_version(&self) -> Option<String> {
        engine_version(&self.engine_command)
    }
}

/// First line of `<command> version`, if the command runs and says anything.
pub fn engine_version(command: &str) -> Option<String> {
    let output = Command::new(command)
        .arg("version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
