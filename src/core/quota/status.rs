//! Severity classification derived from usage percentages.

use serde::{Deserialize, Serialize};

use super::record::QuotaRecord;
use crate::core::config::StatusThresholds;

/// Overall tray status shown by the host panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverallStatus {
    #[default]
    Passive,
    Active,
    NeedsAttention,
}

impl OverallStatus {
    /// Classify a percentage against the configured threshold pair.
    pub fn from_percent(percent: u8, thresholds: &StatusThresholds) -> Self {
        if percent < thresholds.active {
            OverallStatus::Passive
        } else if percent < thresholds.attention {
            OverallStatus::Active
        } else {
            OverallStatus::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::Passive => "passive",
            OverallStatus::Active => "active",
            OverallStatus::NeedsAttention => "needs-attention",
        }
    }
}

/// Icon bucket for a usage percentage. The boundaries are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTier {
    Normal,
    Low,
    High,
    Critical,
}

impl IconTier {
    pub fn from_percent(percent: u8) -> Self {
        if percent < 50 {
            IconTier::Normal
        } else if percent < 75 {
            IconTier::Low
        } else if percent < 90 {
            IconTier::High
        } else {
            IconTier::Critical
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            IconTier::Normal => "quota",
            IconTier::Low => "quota-low",
            IconTier::High => "quota-high",
            IconTier::Critical => "quota-critical",
        }
    }
}

/// Icon name for a usage percentage
pub fn icon_name_for(percent: u8) -> &'static str {
    IconTier::from_percent(percent).icon_name()
}

/// Highest usage across all records, never above 100. Zero when empty.
pub fn overall_percent(records: &[QuotaRecord]) -> u8 {
    records
        .iter()
        .map(|r| r.usage_percent)
        .max()
        .unwrap_or(0)
        .min(100)
}
