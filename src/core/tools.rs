//! Discovery and launching of the external executables the panel relies on.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::core::config::Config;
use crate::error::{QuotaError, Result};

/// Resolve an executable on PATH
pub fn find_executable(name: &str) -> Option<PathBuf> {
    which::which(name).ok()
}

/// Like [`find_executable`], but a missing tool is an error.
pub fn locate_tool(name: &str) -> Result<PathBuf> {
    find_executable(name).ok_or_else(|| QuotaError::tool_not_found(name))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAvailability {
    pub quota_tool_present: bool,
    pub cleanup_tool_present: bool,
}

impl ToolAvailability {
    pub fn probe(config: &Config) -> Self {
        Self {
            quota_tool_present: find_executable(&config.poll.tool).is_some(),
            cleanup_tool_present: cleanup_tool_available(config),
        }
    }
}

/// The cleanup tool counts as available only when enabled in the config
/// and present on PATH.
pub fn cleanup_tool_available(config: &Config) -> bool {
    config.cleanup.enabled && find_executable(&config.cleanup.tool).is_some()
}

/// Launch the cleanup tool on `mount_point`, detached from the panel.
///
/// Does nothing when the tool is unavailable.
pub fn open_cleanup_tool(config: &Config, mount_point: &str) -> Result<()> {
    if !cleanup_tool_available(config) {
        log::debug!(
            "Cleanup tool '{}' unavailable, ignoring request for {}",
            config.cleanup.tool,
            mount_point
        );
        return Ok(());
    }

    log::info!("Launching {} on {}", config.cleanup.tool, mount_point);
    Command::new(&config.cleanup.tool)
        .arg(mount_point)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    Ok(())
}
