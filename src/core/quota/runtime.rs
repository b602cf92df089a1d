//! Tokio runtime hosting the quota poller.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use super::poller::QuotaPoller;
use super::state::QuotaSnapshot;
use crate::core::config::Config;

/// Owns the runtime the poller task lives on.
///
/// Synchronous callers read snapshots through `snapshot_rx` and stop the
/// poller with [`PollerRuntime::shutdown`].
pub struct PollerRuntime {
    /// Receiver for published snapshots
    pub snapshot_rx: watch::Receiver<Arc<QuotaSnapshot>>,

    shutdown_tx: broadcast::Sender<()>,

    runtime: tokio::runtime::Runtime,
}

impl PollerRuntime {
    /// Build the runtime and spawn the poller on it.
    pub fn start(config: Config) -> anyhow::Result<Self> {
        // Create Tokio runtime with a single worker thread
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("quota-poller")
            .build()?;

        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        let poller = QuotaPoller::new(config);
        let snapshot_rx = poller.subscribe();
        runtime.spawn(poller.run(shutdown_tx.subscribe()));

        Ok(Self {
            snapshot_rx,
            shutdown_tx,
            runtime,
        })
    }

    /// Sender that stops the poller; usable from signal handlers.
    pub fn shutdown_handle(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Stop the poller. Any running tool invocation is killed.
    pub fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        self.runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    }
}
