// Poller runs against fake quota tools written as shell scripts.
//
// Scripts are run through `sh <script>` so the test never executes a file
// it has just written.
#![cfg(unix)]

use quota_tray::core::config::Config;
use quota_tray::core::quota::{run_tool, OverallStatus, PollHealth, QuotaPoller};
use quota_tray::error::QuotaError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::broadcast;

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-quota.sh");
    fs::write(&path, body).unwrap();
    path
}

fn config_for(script: &Path, interval_secs: u64) -> Config {
    let mut config = Config::default();
    config.set_tool("sh".to_string());
    config.poll.args = vec![script.to_string_lossy().into_owned()];
    config.set_interval_secs(interval_secs);
    config
}

#[tokio::test]
async fn test_poll_once_parses_tool_output() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(
        temp_dir.path(),
        "echo 'True,home,9500,10000'\necho 'False,tmp,1,2'\necho 'True,share,3000,5000'\n",
    );

    let mut poller = QuotaPoller::new(config_for(&script, 60));
    let snapshot = poller.poll_once().await;

    assert_eq!(snapshot.health, PollHealth::Ok);
    assert!(snapshot.state.quota_tool_installed);
    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.records[0].mount_label, "home");
    assert_eq!(snapshot.records[1].usage_percent, 60);
    assert_eq!(snapshot.state.status, OverallStatus::NeedsAttention);
    assert_eq!(snapshot.state.tool_tip, "Quota: 95% used");
}

#[tokio::test]
async fn test_non_zero_exit_still_parsed() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "echo 'True,home,10,100'\nexit 3\n");

    let mut poller = QuotaPoller::new(config_for(&script, 60));
    let snapshot = poller.poll_once().await;

    assert_eq!(snapshot.health, PollHealth::Ok);
    assert_eq!(snapshot.records.len(), 1);
}

#[tokio::test]
async fn test_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "exit 0\n");

    let mut poller = QuotaPoller::new(config_for(&script, 60));
    let snapshot = poller.poll_once().await;

    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.state.sub_tool_tip, "No quota restrictions found.");
}

#[tokio::test]
async fn test_killed_by_signal_is_abnormal() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "echo 'True,home,10,100'\nkill -9 $$\n");

    let result = run_tool(PathBuf::from("sh"), vec![script.to_string_lossy().into_owned()]).await;
    assert!(matches!(result, Err(QuotaError::ProcessAbnormalExit(_))));

    let mut poller = QuotaPoller::new(config_for(&script, 60));
    let snapshot = poller.poll_once().await;
    assert_eq!(snapshot.health, PollHealth::ProcessFailed);
    assert!(snapshot.records.is_empty());
    assert_eq!(snapshot.state.sub_tool_tip, "Running sh failed");
}

#[tokio::test]
async fn test_run_tool_returns_stdout_for_any_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "echo 'True,home,10,100'\nexit 1\n");

    let stdout = run_tool(PathBuf::from("sh"), vec![script.to_string_lossy().into_owned()])
        .await
        .unwrap();
    assert_eq!(stdout.trim(), "True,home,10,100");
}

#[tokio::test]
async fn test_run_tool_spawn_failure_is_abnormal() {
    let result = run_tool(PathBuf::from("/nonexistent/quota-tray-tool"), Vec::new()).await;
    assert!(matches!(result, Err(QuotaError::ProcessAbnormalExit(_))));
}

#[tokio::test]
async fn test_slow_run_finishing_near_tick_is_applied() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "sleep 0.9\necho 'True,home,80,100'\n");

    let poller = QuotaPoller::new(config_for(&script, 1));
    let mut snapshot_rx = poller.subscribe();
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let task = tokio::spawn(poller.run(shutdown_rx));

    let snapshot = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            snapshot_rx.changed().await.unwrap();
            let snapshot = snapshot_rx.borrow_and_update().clone();
            if !snapshot.records.is_empty() {
                return snapshot;
            }
        }
    })
    .await
    .expect("finished run was never applied");

    assert_eq!(snapshot.records[0].usage_percent, 80);
    assert_eq!(snapshot.health, PollHealth::Ok);

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_missing_tool() {
    let mut config = Config::default();
    config.set_tool("quota-tray-missing-tool-7c1e".to_string());

    let mut poller = QuotaPoller::new(config);
    let snapshot = poller.poll_once().await;

    assert_eq!(snapshot.health, PollHealth::ToolNotFound);
    assert!(!snapshot.state.quota_tool_installed);
    assert!(snapshot.records.is_empty());
    assert_eq!(
        snapshot.state.sub_tool_tip,
        "Please install 'quota-tray-missing-tool-7c1e'"
    );
}

#[tokio::test]
async fn test_run_publishes_snapshots() {
    let temp_dir = TempDir::new().unwrap();
    let script = write_script(temp_dir.path(), "echo 'True,home,60,100'\n");

    let poller = QuotaPoller::new(config_for(&script, 60));
    let mut snapshot_rx = poller.subscribe();
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let task = tokio::spawn(poller.run(shutdown_rx));

    // the first tick fires immediately
    let snapshot = tokio::time::timeout(Duration::from_secs(10), async {
        loop {
            snapshot_rx.changed().await.unwrap();
            let snapshot = snapshot_rx.borrow_and_update().clone();
            if !snapshot.records.is_empty() {
                return snapshot;
            }
        }
    })
    .await
    .expect("no snapshot with records was published");

    assert_eq!(snapshot.records[0].usage_percent, 60);
    assert_eq!(snapshot.state.status, OverallStatus::Active);

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .unwrap()
        .unwrap();
}

#[cfg(target_os = "linux")]
/// A pid counts as gone once it no longer exists or is a zombie.
fn process_gone(pid: &str) -> bool {
    match fs::read_to_string(format!("/proc/{}/stat", pid)) {
        // the state letter follows the parenthesised command name
        Ok(stat) => stat
            .rsplit_once(')')
            .and_then(|(_, rest)| rest.trim_start().chars().next())
            .map_or(true, |state| state == 'Z' || state == 'X'),
        Err(_) => true,
    }
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_hung_tool_is_killed_on_next_tick() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("pids.log");
    let script = write_script(
        temp_dir.path(),
        &format!("echo $$ >> '{}'\nexec sleep 30\n", log.display()),
    );

    let poller = QuotaPoller::new(config_for(&script, 1));
    let snapshot_rx = poller.subscribe();
    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let task = tokio::spawn(poller.run(shutdown_rx));

    // ticks at 0s, 1s and 2s
    tokio::time::sleep(Duration::from_millis(2500)).await;

    let pids: Vec<String> = fs::read_to_string(&log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect();
    assert!(pids.len() >= 2, "tool was not restarted: {:?}", pids);

    // every run but the newest was superseded and must have been killed
    let superseded = &pids[..pids.len() - 1];
    let all_gone = tokio::time::timeout(Duration::from_secs(2), async {
        while !superseded.iter().all(|pid| process_gone(pid)) {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    })
    .await
    .is_ok();
    assert!(all_gone, "superseded runs still alive: {:?}", superseded);

    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .unwrap()
        .unwrap();

    // no run ever finished, so nothing was parsed
    assert!(snapshot_rx.borrow().records.is_empty());
}
