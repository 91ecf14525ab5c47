//! Evaluation Engine Adapters
//!
//! - `command` - runs the engine binary and parses its JSON report
//! - `gem` - installs the pinned engine version through RubyGems

mod command;
mod gem;

pub use command::{default_args, CommandEngine, ARCHIVE_PLACEHOLDER};
pub use gem::{engine_version, GemInstaller};
