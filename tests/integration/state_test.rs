// Folding records into the panel state

use quota_tray::core::config::StatusThresholds;
use quota_tray::core::quota::{Change, DiskQuota, OverallStatus, PollHealth, Property, RowChange};

fn quota() -> DiskQuota {
    DiskQuota::new("lliurex-quota", StatusThresholds::default())
}

#[test]
fn test_needs_attention_at_95_percent() {
    let mut dq = quota();
    dq.apply_output("true,home,9500,10000", None);
    assert_eq!(dq.state().status, OverallStatus::NeedsAttention);
    assert_eq!(dq.state().icon_name, "quota-critical");
    assert_eq!(dq.model().get(0).unwrap().icon_name, "quota-critical");
}

#[test]
fn test_tool_missing_after_records() {
    let mut dq = quota();
    dq.apply_output("True,home,50,100\nTrue,share,10,100", None);
    assert_eq!(dq.model().len(), 2);

    dq.apply_tool_missing();
    let state = dq.state();
    assert!(!state.quota_tool_installed);
    assert!(dq.model().is_empty());
    assert_eq!(state.sub_tool_tip, "Please install 'lliurex-quota'");
}

#[test]
fn test_recovery_after_failure() {
    let mut dq = quota();
    dq.apply_failure();
    assert_eq!(dq.health(), PollHealth::ProcessFailed);

    let changes = dq.apply_output("True,home,80,100", None);
    assert_eq!(dq.health(), PollHealth::Ok);
    assert_eq!(dq.state().tool_tip, "Quota: 80% used");
    assert!(changes.contains(&Change::Property(Property::SubToolTip)));
    assert!(changes.contains(&Change::Row(RowChange::Inserted { row: 0 })));
}

#[test]
fn test_idempotent_snapshots() {
    let mut dq = quota();
    let output = "True,home,3000,5000\nTrue,share,9500,10000\n";

    dq.apply_output(output, None);
    let first = dq.snapshot(Vec::new());
    let changes = dq.apply_output(output, None);
    let second = dq.snapshot(Vec::new());

    assert!(changes.is_empty());
    assert_eq!(first.records, second.records);
    assert_eq!(first.state, second.state);
}

#[test]
fn test_configurable_threshold_pair() {
    let mut dq = DiskQuota::new("lliurex-quota", StatusThresholds { active: 50, attention: 98 });
    dq.apply_output("True,home,95,100", None);
    assert_eq!(dq.state().status, OverallStatus::Active);
    // icon boundaries do not follow the status thresholds
    assert_eq!(dq.state().icon_name, "quota-critical");
}
