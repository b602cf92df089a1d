//! Parse saved quota tool output, without running the tool.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::fs;
use std::io::{self, Read};

use crate::core::quota::DiskQuota;
use crate::ui::{print_snapshot, snapshot_to_json};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = super::load_config(matches)?;
    let json_output = matches.get_flag("json");

    let input = match matches.get_one::<String>("file") {
        Some(path) if path != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read quota output from {}", path))?,
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read quota output from stdin")?;
            buffer
        }
    };

    let mut quota = DiskQuota::new(&config.poll.tool, config.thresholds);
    let changes = quota.apply_output(&input, config.display.mount_label.as_deref());
    let snapshot = quota.snapshot(changes);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&snapshot_to_json(&snapshot))?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}
