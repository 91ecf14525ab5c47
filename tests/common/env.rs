//! Test environment builder for isolated CLI testing.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Variables that would leak the developer's setup into a test run.
const SCRUBBED_VARS: &[&str] = &[
    "COMPLIANCE_CACHE_ROOT",
    "COMPLIANCE_SERVER_URL",
    "COMPLIANCE_TOKEN",
    "COMPLIANCE_RAISE_IF_UNREACHABLE",
    "COMPLIANCE_RAISE_IF_NOT_PRESENT",
    "COMPLIANCE_INSECURE",
    "RUST_LOG",
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: its own HOME, config dir and cache root.
pub struct TestEnv {
    pub home_dir: TempDir,
    pub cache_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().unwrap(),
            cache_dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_compliance")),
        }
    }

    pub fn cache_root(&self) -> &Path {
        self.cache_dir.path()
    }

    /// `<cache_root>/compliance/<file>`
    pub fn cache_path(&self, file: &str) -> PathBuf {
        self.cache_root().join("compliance").join(file)
    }

    /// Write `~/.config/compliance/config.toml`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.home_dir.path().join(".config").join("compliance");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Put a fake archive in the cache.
    pub fn seed_archive(&self, file: &str, content: &[u8]) -> PathBuf {
        let path = self.cache_path(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Run the CLI with `--no-install` so no test ever shells out to `gem`.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("--no-install")
            .args(args)
            .current_dir(self.home_dir.path())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("COMPLIANCE_CACHE_ROOT", self.cache_root())
            .env("NO_COLOR", "1");
        for var in SCRUBBED_VARS.iter().filter(|v| **v != "COMPLIANCE_CACHE_ROOT") {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run compliance binary");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl TestEnv {
    /// `run_with_env` from a multi-threaded tokio test, so a `MockServer`
    /// owned by the test keeps answering while the binary runs.
    pub fn run_blocking(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        tokio::task::block_in_place(|| self.run_with_env(args, env_vars))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
