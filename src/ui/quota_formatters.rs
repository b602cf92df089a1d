use colored::*;
use serde_json::{json, Value};

use super::formatters::format_timestamp;
use crate::core::quota::{OverallStatus, QuotaRecord, QuotaSnapshot};

const BAR_WIDTH: usize = 20;

pub fn print_snapshot(snapshot: &QuotaSnapshot) {
    let state = &snapshot.state;
    let status = colorize_status(state.status);

    println!(
        "{} {} {} {}",
        format!("[{}]", format_timestamp(snapshot.updated_at)).dimmed(),
        status,
        state.tool_tip.bold(),
        format!("({})", state.icon_name).dimmed()
    );

    if !state.sub_tool_tip.is_empty() {
        println!("  {}", state.sub_tool_tip.cyan());
    }
    if !state.quota_tool_installed {
        return;
    }

    print_records(&snapshot.records);
}

pub fn print_records(records: &[QuotaRecord]) {
    for record in records {
        println!(
            "  {} {}",
            usage_bar(record.usage_percent),
            record.mount_summary.white().bold()
        );
        println!(
            "  {:width$} {}, {}",
            "",
            record.used_summary,
            record.free_summary.dimmed(),
            width = BAR_WIDTH + 2
        );
    }
}

/// One-line JSON form of a snapshot, for scripting
pub fn snapshot_to_json(snapshot: &QuotaSnapshot) -> Value {
    let state = &snapshot.state;
    json!({
        "timestamp":              snapshot.updated_at,
        "status":                 state.status.label(),
        "icon_name":              state.icon_name,
        "tool_tip":               state.tool_tip,
        "sub_tool_tip":           state.sub_tool_tip,
        "quota_tool_installed":   state.quota_tool_installed,
        "cleanup_tool_installed": state.cleanup_tool_installed,
        "records": snapshot.records.iter().map(|r| json!({
            "mount_label":   r.mount_label,
            "usage_percent": r.usage_percent,
            "icon_name":     r.icon_name,
            "used":          r.used_bytes,
            "limit":         r.limit_bytes,
            "free":          r.free_bytes,
            "mount_summary": r.mount_summary,
            "used_summary":  r.used_summary,
            "free_summary":  r.free_summary,
        })).collect::<Vec<_>>(),
    })
}

fn colorize_status(status: OverallStatus) -> ColoredString {
    let label = format!("{:<15}", status.label());
    match status {
        OverallStatus::Passive => label.green(),
        OverallStatus::Active => label.yellow(),
        OverallStatus::NeedsAttention => label.red().bold(),
    }
}

fn usage_bar(percent: u8) -> ColoredString {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    );
    if percent >= 90 {
        bar.red()
    } else if percent >= 75 {
        bar.yellow()
    } else {
        bar.green()
    }
}
