//! One-shot poll, nagios style exit codes.

use anyhow::Result;
use clap::ArgMatches;

use crate::core::quota::{OverallStatus, PollHealth, QuotaPoller, QuotaSnapshot};
use crate::ui::{print_snapshot, snapshot_to_json};

/// Exit code for a snapshot: 0 passive, 1 active, 2 needs attention,
/// 3 when the tool is missing or failed.
pub fn exit_code(snapshot: &QuotaSnapshot) -> i32 {
    if snapshot.health != PollHealth::Ok {
        return 3;
    }
    match snapshot.state.status {
        OverallStatus::Passive => 0,
        OverallStatus::Active => 1,
        OverallStatus::NeedsAttention => 2,
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let json_output = matches.get_flag("json");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let snapshot = runtime.block_on(async {
        let mut poller = QuotaPoller::new(config);
        poller.poll_once().await
    });

    if json_output {
        println!("{}", serde_json::to_string_pretty(&snapshot_to_json(&snapshot))?);
    } else {
        print_snapshot(&snapshot);
    }

    std::process::exit(exit_code(&snapshot));
}
