//! Subcommand implementations

pub mod execute;
pub mod fetch;
pub mod paths;
pub mod run;

use std::path::Path;

use anyhow::Result;
use is_terminal::IsTerminal;

use compliance::config::ConfigWarning;
use compliance::presentation::factory::{self, ConcreteProfileRunner};
use compliance::presentation::output::{create_renderer, OutcomeRenderer, OutputFormat};
use compliance::Config;

/// Loaded configuration plus the global flags every subcommand honours.
pub struct Session {
    pub config: Config,
    pub format: OutputFormat,
    pub no_install: bool,
}

impl Session {
    pub fn load(
        config_path: Option<&Path>,
        cache_root: Option<&Path>,
        json: bool,
        no_install: bool,
    ) -> Result<Self> {
        let (mut config, warnings) = Config::load_or_default(config_path)?;
        print_config_warnings(&warnings);

        if let Some(root) = cache_root {
            config.cache_root = root.to_path_buf();
        }

        Ok(Self {
            config,
            format: OutputFormat::from_json_flag(json),
            no_install,
        })
    }

    pub fn renderer(&self) -> Box<dyn OutcomeRenderer> {
        create_renderer(self.format, std::io::stdout().is_terminal())
    }

    /// Provision the engine once, then wire the runner around it.
    pub fn runner(&self) -> Result<ConcreteProfileRunner> {
        let engine_version = if self.no_install {
            tracing::debug!("engine provisioning skipped (--no-install)");
            None
        } else {
            factory::provision(&self.config).and_then(|status| status.installed_version)
        };

        Ok(factory::create_profile_runner(&self.config, engine_version)?)
    }
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
}
