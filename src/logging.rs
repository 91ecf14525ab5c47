//! Structured logging setup
//!
//! Events go to stderr through `tracing-subscriber`'s fmt layer so stdout
//! stays free for `--json` output. `RUST_LOG` overrides the `-v`/`-q` level.

use is_terminal::IsTerminal;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Level implied by `-q` / `-v` counts.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(verbose > 0)
                .with_filter(filter),
        )
        .try_init();
}
