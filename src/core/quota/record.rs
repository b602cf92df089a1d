use serde::{Deserialize, Serialize};

use super::status::icon_name_for;
use crate::ui::formatters::format_bytes;

/// Quota usage of one mount point, with the strings the panel displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    pub icon_name: String,
    pub mount_label: String,
    /// Always within 0..=100
    pub usage_percent: u8,
    /// "<label>: N% used"
    pub mount_summary: String,
    /// "<used> of <limit>"
    pub used_summary: String,
    /// "<free> free"
    pub free_summary: String,
    pub used_bytes: u64,
    pub limit_bytes: u64,
    pub free_bytes: u64,
}

impl QuotaRecord {
    /// Build a record from byte counts. `limit_bytes` must be non-zero.
    pub fn from_usage(label: &str, used_bytes: u64, limit_bytes: u64) -> Self {
        let usage_percent = usage_percent(used_bytes, limit_bytes);
        let free_bytes = limit_bytes.saturating_sub(used_bytes);

        Self {
            icon_name: icon_name_for(usage_percent).to_string(),
            mount_label: label.to_string(),
            usage_percent,
            mount_summary: format!("{}: {}% used", label, usage_percent),
            used_summary: format!(
                "{} of {}",
                format_bytes(used_bytes),
                format_bytes(limit_bytes)
            ),
            free_summary: format!("{} free", format_bytes(free_bytes)),
            used_bytes,
            limit_bytes,
            free_bytes,
        }
    }
}

/// round(used * 100 / limit) clamped to 0..=100
fn usage_percent(used_bytes: u64, limit_bytes: u64) -> u8 {
    if limit_bytes == 0 {
        return 0;
    }
    let raw = (used_bytes as f64 * 100.0 / limit_bytes as f64).round();
    raw.clamp(0.0, 100.0) as u8
}
