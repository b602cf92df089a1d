use anyhow::Result;
use colored::Colorize;

use crate::core::tools::ToolAvailability;
use crate::core::Config;

/// Print the config file location and the effective values
pub fn show() -> Result<()> {
    let config = Config::load()?;
    let path = Config::get_config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "(unknown)".to_string());
    let tools = ToolAvailability::probe(&config);

    println!("{} {}", "Config:".bold(), path);
    println!();
    println!("[poll]");
    println!("  interval_secs = {}", config.poll.interval_secs);
    println!("  tool          = {} {}", config.poll.tool, found(tools.quota_tool_present));
    println!("  args          = {:?}", config.poll.args);
    println!();
    println!("[thresholds]");
    println!("  active    = {}%", config.thresholds.active);
    println!("  attention = {}%", config.thresholds.attention);
    println!();
    println!("[cleanup]");
    println!("  enabled = {}", config.cleanup.enabled);
    println!("  tool    = {} {}", config.cleanup.tool, found(tools.cleanup_tool_present));
    println!();
    println!("[display]");
    match &config.display.mount_label {
        Some(label) => println!("  mount_label = {:?}", label),
        None => println!("  mount_label = (reported by tool)"),
    }

    if let Err(e) = config.validate() {
        println!();
        println!("{}", e.to_string().red().bold());
    }
    Ok(())
}

fn found(present: bool) -> colored::ColoredString {
    if present {
        "(found)".green()
    } else {
        "(not available)".yellow()
    }
}
