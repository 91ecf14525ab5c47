//! Tests for the config module

use super::loader::{apply_overrides, load_or_default, load_with_warnings};
use super::types::*;
use crate::domain::value_objects::{Credentials, ProfileReference};
use crate::error::ComplianceError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.audit.raise_if_unreachable);
    assert!(!config.audit.raise_if_not_present);
    assert!(!config.catalog.insecure_skip_verify);
    assert_eq!(config.engine.package, "inspec");
    assert_eq!(config.engine.version, "0.15.0");
    assert_eq!(
        config.engine.args,
        vec!["exec", "{archive}", "--format", "json"]
    );
    assert!(config.engine.auto_install);
    assert!(config.cache_root.ends_with("compliance"));
    assert!(config.profiles.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
cache_root = "/var/cache/chef"
server_url = "https://chef.example.com/organizations/acme"

[audit]
raise_if_unreachable = false
raise_if_not_present = true

[catalog]
server = "https://compliance.example.com"
port = 8443
token = "abc"
insecure_skip_verify = true
timeout_secs = 30

[engine]
version = "1.0.0"
args = ["exec", "{archive}", "--reporter", "json"]

[[profiles]]
name = "ssh"

[[profiles]]
owner = "team"
name = "linux"

[[profiles]]
name = "local"
path = "/opt/profiles/local.tgz"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.cache_root, PathBuf::from("/var/cache/chef"));
    assert!(!config.audit.raise_if_unreachable);
    assert!(config.audit.raise_if_not_present);
    assert_eq!(config.catalog.port, Some(8443));
    assert_eq!(
        config.catalog.credentials().unwrap(),
        Credentials::Token("abc".into())
    );
    assert_eq!(config.engine.version, "1.0.0");
    assert_eq!(config.engine.command, "inspec");

    let profiles = config.profile_references();
    assert_eq!(
        profiles,
        vec![
            ProfileReference::new("ssh"),
            ProfileReference::new("linux").with_owner("team"),
            ProfileReference::new("local").with_path("/opt/profiles/local.tgz"),
        ]
    );
}

#[test]
fn test_empty_file_is_all_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.audit, AuditConfig::default());
    assert_eq!(config.engine, EngineConfig::default());
}

#[test]
fn test_unknown_keys_warn_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[audit]\nraise_if_unreachabel = false\n\n[catalog]\nflux = 1\n",
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(config.audit.raise_if_unreachable);
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].key, "raise_if_unreachabel");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("raise_if_unreachable")
    );
    assert!(warnings[0].to_string().contains("did you mean"));
    assert_eq!(warnings[1].key, "flux");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not toml = = =").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, ComplianceError::InvalidConfig { .. }));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = tempdir().unwrap();
    let err = load_or_default(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ComplianceError::Io(_)));
}

#[test]
fn test_env_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("COMPLIANCE_CACHE_ROOT", "/tmp/cache"),
        ("COMPLIANCE_SERVER_URL", "https://chef/organizations/x"),
        ("COMPLIANCE_RAISE_IF_UNREACHABLE", "false"),
        ("COMPLIANCE_RAISE_IF_NOT_PRESENT", "1"),
        ("COMPLIANCE_TOKEN", "t0k"),
        ("COMPLIANCE_INSECURE", "true"),
    ]);

    let config = apply_overrides(Config::default(), |key| {
        env.get(key).map(|v| v.to_string())
    });

    assert_eq!(config.cache_root, PathBuf::from("/tmp/cache"));
    assert_eq!(
        config.server_url.as_deref(),
        Some("https://chef/organizations/x")
    );
    assert!(!config.audit.raise_if_unreachable);
    assert!(config.audit.raise_if_not_present);
    assert_eq!(config.catalog.token.as_deref(), Some("t0k"));
    assert!(config.catalog.insecure_skip_verify);
}

#[test]
fn test_no_env_leaves_config_alone() {
    let config = apply_overrides(Config::default(), |_| None);
    assert_eq!(config, Config::default());
}

#[test]
fn test_catalog_debug_redacts_secrets() {
    let catalog = CatalogConfig {
        username: Some("admin".into()),
        password: Some("hunter2".into()),
        ..CatalogConfig::default()
    };
    let debug = format!("{:?}", catalog);
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}
