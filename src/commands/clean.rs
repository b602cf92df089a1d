use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::tools::{cleanup_tool_available, open_cleanup_tool};
use crate::ui::{success, warn};

/// Open the configured cleanup tool on a mount point
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let mount_point = matches
        .get_one::<String>("mount")
        .context("Mount point argument is required")?;

    if !cleanup_tool_available(&config) {
        warn(&format!(
            "Cleanup tool '{}' is not available (enable it under [cleanup] in the config)",
            config.cleanup.tool
        ));
        return Ok(());
    }

    open_cleanup_tool(&config, mount_point)
        .with_context(|| format!("Failed to launch {}", config.cleanup.tool))?;
    success(&format!("Opened {} on {}", config.cleanup.tool, mount_point));
    Ok(())
}
