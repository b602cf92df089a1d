//! Timer-driven invocation of the quota tool.
//!
//! At most one run of the tool is outstanding. When the ticker fires while
//! the previous run is still going, that run is aborted and its child process
//! killed before a new one starts.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::{broadcast, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval, MissedTickBehavior};

use super::state::{Change, DiskQuota, QuotaSnapshot};
use crate::core::config::Config;
use crate::core::tools::{cleanup_tool_available, locate_tool};
use crate::error::{QuotaError, Result};

pub struct QuotaPoller {
    config: Config,
    quota: DiskQuota,
    snapshot_tx: watch::Sender<Arc<QuotaSnapshot>>,
}

impl QuotaPoller {
    pub fn new(config: Config) -> Self {
        let quota = DiskQuota::new(&config.poll.tool, config.thresholds);
        let (snapshot_tx, _) = watch::channel(Arc::new(quota.snapshot(Vec::new())));
        Self {
            config,
            quota,
            snapshot_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<QuotaSnapshot>> {
        self.snapshot_tx.subscribe()
    }

    pub fn quota(&self) -> &DiskQuota {
        &self.quota
    }

    /// Run a single cycle to completion and return the resulting snapshot.
    pub async fn poll_once(&mut self) -> Arc<QuotaSnapshot> {
        let (program, mut changes) = self.prepare();
        if let Some(program) = program {
            let result = run_tool(program, self.config.poll.args.clone()).await;
            changes.extend(self.complete(result));
        }
        self.publish(changes.clone());
        Arc::new(self.quota.snapshot(changes))
    }

    /// Poll on the configured interval until `shutdown` fires.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        log::info!(
            "Polling {} every {}s",
            self.config.poll.tool,
            self.config.poll.interval_secs
        );

        let mut ticker = interval(self.config.poll.interval());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut in_flight: Option<JoinHandle<Result<String>>> = None;

        loop {
            tokio::select! {
                // a run that already finished is applied before the next tick can abort it
                biased;

                joined = wait_for(&mut in_flight), if in_flight.is_some() => {
                    in_flight = None;
                    let result = match joined {
                        Ok(result) => result,
                        Err(e) if e.is_cancelled() => continue,
                        Err(e) => {
                            log::error!("Quota run panicked: {}", e);
                            Err(QuotaError::abnormal_exit(&self.config.poll.tool))
                        }
                    };
                    let changes = self.complete(result);
                    self.publish(changes);
                }
                _ = ticker.tick() => {
                    if let Some(handle) = in_flight.take() {
                        log::warn!("{} is still running, killing it", self.config.poll.tool);
                        handle.abort();
                    }

                    let (program, changes) = self.prepare();
                    self.publish(changes);

                    in_flight = program.map(|program| {
                        tokio::spawn(run_tool(program, self.config.poll.args.clone()))
                    });
                }
                _ = shutdown.recv() => {
                    if let Some(handle) = in_flight.take() {
                        handle.abort();
                    }
                    log::info!("Quota poller shutting down");
                    break;
                }
            }
        }
    }

    /// Probe the tools. Returns the resolved quota tool, or `None` when it is
    /// missing, in which case the not-installed state has been applied.
    fn prepare(&mut self) -> (Option<PathBuf>, Vec<Change>) {
        let program = match locate_tool(&self.config.poll.tool) {
            Ok(program) => program,
            Err(e) => {
                log::warn!("{}", e);
                return (None, self.quota.apply_tool_missing());
            }
        };

        let changes = self
            .quota
            .set_cleanup_tool_installed(cleanup_tool_available(&self.config));
        (Some(program), changes)
    }

    fn complete(&mut self, result: Result<String>) -> Vec<Change> {
        match result {
            Ok(stdout) => self
                .quota
                .apply_output(&stdout, self.config.display.mount_label.as_deref()),
            Err(e) => {
                log::warn!("{}", e);
                self.quota.apply_failure()
            }
        }
    }

    fn publish(&self, changes: Vec<Change>) {
        if changes.is_empty() {
            return;
        }
        log::debug!("Publishing {} change(s)", changes.len());
        let snapshot = Arc::new(self.quota.snapshot(changes));
        // receivers are only woken when something actually changed
        self.snapshot_tx.send_replace(snapshot);
    }
}

async fn wait_for(
    slot: &mut Option<JoinHandle<Result<String>>>,
) -> std::result::Result<Result<String>, JoinError> {
    match slot {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

/// Run the tool once and return its stdout.
///
/// Any exit code counts as a normal exit. Failing to start the tool, or the
/// tool being terminated by a signal, is `ProcessAbnormalExit`. The child is
/// killed if the returned future is dropped before it exits.
pub async fn run_tool(program: PathBuf, args: Vec<String>) -> Result<String> {
    let output = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| {
            log::debug!("Failed to spawn {:?}: {}", program, e);
            QuotaError::abnormal_exit(format!("{} ({})", program.display(), e))
        })?;

    if output.status.code().is_none() {
        return Err(QuotaError::abnormal_exit(format!(
            "{} ({})",
            program.display(),
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
