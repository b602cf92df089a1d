// Command handlers module
pub mod check;
pub mod clean;
pub mod completions;
pub mod config;
pub mod parse;
pub mod version;
pub mod watch;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::Config;

// Re-exports for cleaner imports
pub use check::execute as check;
pub use parse::execute as parse;
pub use version::execute as version;
pub use watch::execute as watch;

/// Load the config file and apply `--interval` / `--tool` overrides.
pub fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = Config::load()?;

    if let Ok(Some(interval)) = matches.try_get_one::<u64>("interval") {
        config.set_interval_secs(*interval);
    }
    if let Ok(Some(tool)) = matches.try_get_one::<String>("tool") {
        config.set_tool(tool.clone());
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
