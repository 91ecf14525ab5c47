//! Compliance CLI - fetch compliance profiles and run them against this host
//!
//! Usage: compliance <COMMAND>
//!
//! Commands:
//!   fetch    Download a profile archive from the catalog into the cache
//!   execute  Run a cached or local profile archive and write its report
//!   run      Fetch and execute profiles
//!   paths    Show where a profile's archive and report live

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    compliance::logging::init(cli.verbose, cli.quiet);

    let session = Session::load(
        cli.config.as_deref(),
        cli.cache_root.as_deref(),
        cli.json,
        cli.no_install,
    )?;

    match cli.command {
        Commands::Fetch {
            profile,
            raise_if_unreachable,
            insecure,
        } => commands::fetch::cmd_fetch(
            session,
            &profile.to_reference(),
            raise_if_unreachable,
            insecure,
        ),
        Commands::Execute {
            profile,
            raise_if_not_present,
        } => commands::execute::cmd_execute(session, &profile.to_reference(), raise_if_not_present),
        Commands::Run {
            names,
            raise_if_unreachable,
            raise_if_not_present,
            insecure,
        } => commands::run::cmd_run(
            session,
            &names,
            raise_if_unreachable,
            raise_if_not_present,
            insecure,
        ),
        Commands::Paths { profile } => commands::paths::cmd_paths(session, &profile.to_reference()),
    }
}
