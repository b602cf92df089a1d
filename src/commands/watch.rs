//! Continuous polling with one line of output per published change.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::quota::PollerRuntime;
use crate::ui::{dimmed, print_snapshot, snapshot_to_json};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let json_output = matches.get_flag("json");

    if !json_output {
        dimmed(&format!(
            "Polling {} every {}s, press Ctrl-C to stop",
            config.poll.tool, config.poll.interval_secs
        ));
    }

    let runtime = PollerRuntime::start(config).context("Failed to start quota poller")?;

    let stop_tx = runtime.shutdown_handle();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut snapshot_rx = runtime.snapshot_rx.clone();
    let mut stop_rx = runtime.shutdown_handle().subscribe();

    runtime.block_on(async {
        loop {
            tokio::select! {
                changed = snapshot_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let snapshot = snapshot_rx.borrow_and_update().clone();
                    if json_output {
                        println!("{}", snapshot_to_json(&snapshot));
                    } else {
                        print_snapshot(&snapshot);
                    }
                }
                _ = stop_rx.recv() => break,
            }
        }
    });

    runtime.shutdown();
    Ok(())
}
