use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::QuotaError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poll: PollConfig,
    #[serde(default)]
    pub thresholds: StatusThresholds,
    #[serde(default)]
    pub cleanup: CleanupConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Seconds between two invocations of the quota tool
    pub interval_secs: u64,
    /// Executable looked up on PATH
    pub tool: String,
    pub args: Vec<String>,
}

/// Percent boundaries for the overall tray status.
///
/// Below `active` the tray is passive, below `attention` it is active,
/// anything else needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusThresholds {
    pub active: u8,
    pub attention: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Launching a cleanup tool is off unless explicitly enabled
    pub enabled: bool,
    pub tool: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Fixed caption used instead of the label reported by the tool
    pub mount_label: Option<String>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: 60,
            tool: "lliurex-quota".to_string(),
            args: vec!["-mq".to_string()],
        }
    }
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            active: 50,
            attention: 90,
        }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            tool: "filelight".to_string(),
        }
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Config {
    /// Load the user config, falling back to defaults when the file is
    /// missing or cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = toml::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", path, e);
            Config::default()
        });

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, data)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("quota-tray").join("config.toml"))
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.poll.interval_secs == 0 {
            return Err(QuotaError::config("poll.interval_secs must be at least 1"));
        }
        if self.poll.tool.trim().is_empty() {
            return Err(QuotaError::config("poll.tool must not be empty"));
        }
        let t = &self.thresholds;
        if t.active > t.attention || t.attention > 100 {
            return Err(QuotaError::config(format!(
                "thresholds must satisfy active <= attention <= 100 (got {} / {})",
                t.active, t.attention
            )));
        }
        Ok(())
    }

    pub fn set_interval_secs(&mut self, secs: u64) {
        self.poll.interval_secs = secs;
    }

    pub fn set_tool(&mut self, tool: String) {
        self.poll.tool = tool;
    }
}
