//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Credentials, EndpointError, ProfileReference};
use crate::error::ComplianceResult;
use crate::infrastructure::engine::default_args;

use super::loader::{self, ConfigWarning};

/// Failure policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Fail a fetch on 401/403 instead of falling back to the cached archive
    #[serde(default = "default_true")]
    pub raise_if_unreachable: bool,

    /// Fail an execution when the archive is missing instead of skipping it
    #[serde(default)]
    pub raise_if_not_present: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            raise_if_unreachable: true,
            raise_if_not_present: false,
        }
    }
}

/// Catalog connection settings
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Dedicated catalog server; defaults to the management server's origin
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    /// Accept any TLS certificate from the catalog
    #[serde(default)]
    pub insecure_skip_verify: bool,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CatalogConfig {
    pub fn credentials(&self) -> Result<Credentials, EndpointError> {
        Credentials::from_parts(
            self.username.clone(),
            self.password.clone(),
            self.token.clone(),
        )
    }
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("insecure_skip_verify", &self.insecure_skip_verify)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Evaluation engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine_package")]
    pub package: String,

    /// Pinned engine version
    #[serde(default = "default_engine_version")]
    pub version: String,

    #[serde(default = "default_engine_command")]
    pub command: String,

    #[serde(default = "default_gem")]
    pub gem: String,

    /// Arguments; `{archive}` is replaced by the archive path
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default = "default_true")]
    pub auto_install: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            package: default_engine_package(),
            version: default_engine_version(),
            command: default_engine_command(),
            gem: default_gem(),
            args: default_args(),
            auto_install: true,
        }
    }
}

fn default_engine_package() -> String {
    "inspec".to_string()
}

fn default_engine_version() -> String {
    "0.15.0".to_string()
}

fn default_engine_command() -> String {
    "inspec".to_string()
}

fn default_gem() -> String {
    "gem".to_string()
}

fn default_true() -> bool {
    true
}

/// A profile to fetch and execute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub name: String,

    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl ProfileEntry {
    pub fn to_reference(&self) -> ProfileReference {
        let mut profile = ProfileReference::new(self.name.clone());
        if let Some(owner) = &self.owner {
            profile = profile.with_owner(owner.clone());
        }
        if let Some(path) = &self.path {
            profile = profile.with_path(path.clone());
        }
        profile
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `compliance/` archives and reports
    #[serde(default = "default_cache_root")]
    pub cache_root: PathBuf,

    /// Management server URL; its last path segment names the organization
    #[serde(default)]
    pub server_url: Option<String>,

    /// Directory for in-flight downloads; system temp dir when unset
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub profiles: Vec<ProfileEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_root: default_cache_root(),
            server_url: None,
            staging_dir: None,
            audit: AuditConfig::default(),
            catalog: CatalogConfig::default(),
            engine: EngineConfig::default(),
            profiles: Vec::new(),
        }
    }
}

pub(crate) fn default_cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("compliance")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ComplianceResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ComplianceResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit path, the user config, or defaults; then apply
    /// `COMPLIANCE_*` environment overrides.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> ComplianceResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Configured profiles as references.
    pub fn profile_references(&self) -> Vec<ProfileReference> {
        self.profiles.iter().map(ProfileEntry::to_reference).collect()
    }
}
