//! Presentation state exposed to the host panel.
//!
//! [`DiskQuota`] owns the scalar properties and the record list. Every
//! transition returns the [`Change`]s it caused so that a host can forward
//! them as property-changed notifications.

use serde::{Deserialize, Serialize};

use super::model::{QuotaListModel, RowChange};
use super::parser::parse_output;
use super::record::QuotaRecord;
use super::status::{icon_name_for, overall_percent, OverallStatus};
use crate::core::config::StatusThresholds;

const TOOL_TIP_TITLE: &str = "Disk Quota";
const NO_RESTRICTIONS: &str = "No quota restrictions found.";

/// Scalar properties shown by the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaState {
    pub icon_name: String,
    pub tool_tip: String,
    pub sub_tool_tip: String,
    pub status: OverallStatus,
    pub quota_tool_installed: bool,
    pub cleanup_tool_installed: bool,
}

impl Default for QuotaState {
    fn default() -> Self {
        Self {
            icon_name: icon_name_for(0).to_string(),
            tool_tip: TOOL_TIP_TITLE.to_string(),
            sub_tool_tip: String::new(),
            status: OverallStatus::Passive,
            quota_tool_installed: false,
            cleanup_tool_installed: false,
        }
    }
}

/// Observable property of [`QuotaState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    IconName,
    ToolTip,
    SubToolTip,
    Status,
    QuotaToolInstalled,
    CleanupToolInstalled,
}

/// A single change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Change {
    Property(Property),
    Row(RowChange),
}

/// How the most recent cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PollHealth {
    #[default]
    Ok,
    ToolNotFound,
    ProcessFailed,
}

/// Everything the poller publishes after a cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotaSnapshot {
    pub state: QuotaState,
    pub records: Vec<QuotaRecord>,
    pub changes: Vec<Change>,
    pub health: PollHealth,
    /// Unix timestamp of the cycle that produced this snapshot
    pub updated_at: i64,
}

/// State object backing the panel widget.
#[derive(Debug, Clone)]
pub struct DiskQuota {
    state: QuotaState,
    model: QuotaListModel,
    thresholds: StatusThresholds,
    tool: String,
    health: PollHealth,
}

impl DiskQuota {
    pub fn new(tool: &str, thresholds: StatusThresholds) -> Self {
        Self {
            state: QuotaState::default(),
            model: QuotaListModel::new(),
            thresholds,
            tool: tool.to_string(),
            health: PollHealth::Ok,
        }
    }

    pub fn state(&self) -> &QuotaState {
        &self.state
    }

    pub fn model(&self) -> &QuotaListModel {
        &self.model
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn health(&self) -> PollHealth {
        self.health
    }

    pub fn snapshot(&self, changes: Vec<Change>) -> QuotaSnapshot {
        QuotaSnapshot {
            state: self.state.clone(),
            records: self.model.items().to_vec(),
            changes,
            health: self.health,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }

    /// The quota tool could not be found on PATH.
    pub fn apply_tool_missing(&mut self) -> Vec<Change> {
        let mut changes = Vec::new();
        self.health = PollHealth::ToolNotFound;
        self.set_quota_tool_installed(false, &mut changes);
        self.clear_records(&mut changes);
        self.set_status(OverallStatus::Passive, &mut changes);
        self.set_icon_name(icon_name_for(0), &mut changes);
        self.set_tool_tip(TOOL_TIP_TITLE, &mut changes);
        let hint = format!("Please install '{}'", self.tool);
        self.set_sub_tool_tip(&hint, &mut changes);
        changes
    }

    /// The tool was found but its run did not finish normally.
    pub fn apply_failure(&mut self) -> Vec<Change> {
        let mut changes = Vec::new();
        self.health = PollHealth::ProcessFailed;
        self.set_quota_tool_installed(true, &mut changes);
        self.clear_records(&mut changes);
        self.set_status(OverallStatus::Passive, &mut changes);
        self.set_icon_name(icon_name_for(0), &mut changes);
        self.set_tool_tip(TOOL_TIP_TITLE, &mut changes);
        let message = format!("Running {} failed", self.tool);
        self.set_sub_tool_tip(&message, &mut changes);
        changes
    }

    /// Parse a run's stdout and apply the resulting records.
    pub fn apply_output(&mut self, output: &str, label_override: Option<&str>) -> Vec<Change> {
        let records = parse_output(output, label_override);
        self.apply_records(records)
    }

    pub fn apply_records(&mut self, records: Vec<QuotaRecord>) -> Vec<Change> {
        let mut changes = Vec::new();
        self.health = PollHealth::Ok;
        self.set_quota_tool_installed(true, &mut changes);

        let percent = overall_percent(&records);
        self.set_icon_name(icon_name_for(percent), &mut changes);
        self.set_status(OverallStatus::from_percent(percent, &self.thresholds), &mut changes);

        if records.is_empty() {
            self.set_tool_tip(TOOL_TIP_TITLE, &mut changes);
            self.set_sub_tool_tip(NO_RESTRICTIONS, &mut changes);
        } else {
            let tool_tip = format!("Quota: {}% used", percent);
            self.set_tool_tip(&tool_tip, &mut changes);
            self.set_sub_tool_tip("", &mut changes);
        }

        changes.extend(self.model.update_items(records).into_iter().map(Change::Row));
        changes
    }

    pub fn set_cleanup_tool_installed(&mut self, installed: bool) -> Vec<Change> {
        let mut changes = Vec::new();
        if self.state.cleanup_tool_installed != installed {
            self.state.cleanup_tool_installed = installed;
            changes.push(Change::Property(Property::CleanupToolInstalled));
        }
        changes
    }

    fn clear_records(&mut self, changes: &mut Vec<Change>) {
        changes.extend(self.model.clear().into_iter().map(Change::Row));
    }

    fn set_quota_tool_installed(&mut self, installed: bool, changes: &mut Vec<Change>) {
        if self.state.quota_tool_installed != installed {
            self.state.quota_tool_installed = installed;
            changes.push(Change::Property(Property::QuotaToolInstalled));
        }
    }

    fn set_status(&mut self, status: OverallStatus, changes: &mut Vec<Change>) {
        if self.state.status != status {
            self.state.status = status;
            changes.push(Change::Property(Property::Status));
        }
    }

    fn set_icon_name(&mut self, name: &str, changes: &mut Vec<Change>) {
        if self.state.icon_name != name {
            self.state.icon_name = name.to_string();
            changes.push(Change::Property(Property::IconName));
        }
    }

    fn set_tool_tip(&mut self, tool_tip: &str, changes: &mut Vec<Change>) {
        if self.state.tool_tip != tool_tip {
            self.state.tool_tip = tool_tip.to_string();
            changes.push(Change::Property(Property::ToolTip));
        }
    }

    fn set_sub_tool_tip(&mut self, sub_tool_tip: &str, changes: &mut Vec<Change>) {
        if self.state.sub_tool_tip != sub_tool_tip {
            self.state.sub_tool_tip = sub_tool_tip.to_string();
            changes.push(Change::Property(Property::SubToolTip));
        }
    }
}
