//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComplianceError, ComplianceResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ComplianceResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ComplianceError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit config, the user config, or defaults.
///
/// An explicit path must exist. The user config is optional, but when it
/// exists it must parse.
pub fn load_or_default(explicit: Option<&Path>) -> ComplianceResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// `$XDG_CONFIG_HOME/compliance/config.toml`, falling back to `~/.config`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("compliance").join("config.toml"))
}

/// Apply environment variable overrides (COMPLIANCE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`; split out so tests need not touch the
/// process environment.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // COMPLIANCE_CACHE_ROOT
    if let Some(root) = lookup("COMPLIANCE_CACHE_ROOT").filter(|v| !v.is_empty()) {
        config.cache_root = PathBuf::from(root);
    }

    // COMPLIANCE_SERVER_URL
    if let Some(url) = lookup("COMPLIANCE_SERVER_URL").filter(|v| !v.is_empty()) {
        config.server_url = Some(url);
    }

    // COMPLIANCE_TOKEN
    if let Some(token) = lookup("COMPLIANCE_TOKEN").filter(|v| !v.is_empty()) {
        config.catalog.token = Some(token);
    }

    // COMPLIANCE_RAISE_IF_UNREACHABLE
    if let Some(val) = lookup("COMPLIANCE_RAISE_IF_UNREACHABLE") {
        config.audit.raise_if_unreachable = parse_flag(&val);
    }

    // COMPLIANCE_RAISE_IF_NOT_PRESENT
    if let Some(val) = lookup("COMPLIANCE_RAISE_IF_NOT_PRESENT") {
        config.audit.raise_if_not_present = parse_flag(&val);
    }

    // COMPLIANCE_INSECURE
    if let Some(val) = lookup("COMPLIANCE_INSECURE") {
        config.catalog.insecure_skip_verify = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    !(val.is_empty() || val == "false" || val == "0" || val == "no" || val == "off")
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "cache_root",
        "server_url",
        "staging_dir",
        "audit",
        "raise_if_unreachable",
        "raise_if_not_present",
        "catalog",
        "server",
        "port",
        "username",
        "password",
        "token",
        "insecure_skip_verify",
        "timeout_secs",
        "engine",
        "package",
        "version",
        "command",
        "gem",
        "args",
        "auto_install",
        "profiles",
        "name",
        "owner",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
