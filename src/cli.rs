//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose, --quiet, --no-install) are inherited by all subcommands
//! - Policy flags only ever turn a policy on; turning one off is done in config or env

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use compliance::ProfileReference;

/// Compliance - fetch and execute compliance profiles
#[derive(Parser, Debug)]
#[command(name = "compliance")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.config/compliance/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the cache root
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_root: Option<PathBuf>,

    /// Print one JSON outcome per operation on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not install or check the evaluation engine before running
    #[arg(long, global = true)]
    pub no_install: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Identifies one profile on the command line.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProfileArgs {
    /// Profile name, optionally prefixed with its owner (`owner/name`)
    pub name: String,

    /// Owner namespace (default: base)
    #[arg(long)]
    pub owner: Option<String>,

    /// Use this local archive instead of the cached download
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl ProfileArgs {
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

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a profile archive from the catalog into the cache
    Fetch {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Fail on 401/403 instead of keeping the cached archive
        #[arg(long)]
        raise_if_unreachable: bool,

        /// Skip TLS certificate verification for the catalog
        #[arg(long)]
        insecure: bool,
    },

    /// Run a cached or local profile archive and write its report
    Execute {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Fail when the archive is missing instead of skipping
        #[arg(long)]
        raise_if_not_present: bool,
    },

    /// Fetch and execute profiles (all configured profiles when none are given)
    Run {
        /// Profiles as `name` or `owner/name`
        names: Vec<String>,

        /// Fail on 401/403 instead of keeping the cached archive
        #[arg(long)]
        raise_if_unreachable: bool,

        /// Fail when an archive is missing instead of skipping
        #[arg(long)]
        raise_if_not_present: bool,

        /// Skip TLS certificate verification for the catalog
        #[arg(long)]
        insecure: bool,
    },

    /// Show where a profile's archive and report live
    Paths {
        #[command(flatten)]
        profile: ProfileArgs,
    },
}
