//! Engine provisioning
//!
//! Installs the pinned evaluation engine once, before any profile runs.
//! Nothing here is fatal: a failed install or a version mismatch only warns.

use crate::domain::ports::EngineInstaller;

/// What provisioning found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStatus {
    pub pinned_version: String,
    pub installed_version: Option<String>,
}

impl EngineStatus {
    /// True when the engine on the path is known to differ from the pin.
    pub fn is_mismatch(&self) -> bool {
        self.installed_version
            .as_deref()
            .is_some_and(|installed| installed != self.pinned_version)
    }
}

pub fn provision_engine(
    installer: &dyn EngineInstaller,
    package: &str,
    version: &str,
) -> EngineStatus {
    if let Err(err) = installer.ensure_installed(package, version) {
        tracing::warn!("could not install {} {}: {}", package, version, err);
    }

    let status = EngineStatus {
        pinned_version: version.to_string(),
        installed_version: installer.installed_version(),
    };

    match status.installed_version.as_deref() {
        Some(installed) if status.is_mismatch() => tracing::warn!(
            installed,
            pinned = version,
            "wrong version of {} ({}), please remove old versions (gem uninstall {})",
            package,
            installed,
            package
        ),
        Some(installed) => tracing::debug!(installed, "{} is ready", package),
        None => tracing::warn!("could not determine the installed version of {}", package),
    }

    status
}
