use anyhow::Result;
use clap::{Arg, ArgAction, Command};

use quota_tray::commands;

fn interval_arg() -> Arg {
    Arg::new("interval")
        .short('i')
        .long("interval")
        .value_name("SECS")
        .help("Seconds between two runs of the quota tool")
        .value_parser(clap::value_parser!(u64))
}

fn tool_arg() -> Arg {
    Arg::new("tool")
        .short('t')
        .long("tool")
        .value_name("NAME")
        .help("Quota tool to run (looked up on PATH)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print JSON instead of text")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("quota-tray")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Polls a disk quota tool and reports per-mount usage")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("watch")
                .about("Poll the quota tool continuously and print every change")
                .arg(interval_arg())
                .arg(tool_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Poll once; exit 0/1/2 for passive/active/needs-attention, 3 on failure")
                .arg(tool_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse saved quota tool output from a file or stdin")
                .arg(
                    Arg::new("file")
                        .help("File with the tool output ('-' or omitted for stdin)")
                        .index(1),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("clean")
                .about("Open the cleanup tool on a mount point")
                .arg(
                    Arg::new("mount")
                        .help("Mount point to inspect")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("config").about("Show config file path and effective values"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell: bash, zsh, fish, powershell, elvish")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    quota_tray::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("watch", sub_matches)) => commands::watch(sub_matches),
        Some(("check", sub_matches)) => commands::check(sub_matches),
        Some(("parse", sub_matches)) => commands::parse(sub_matches),
        Some(("clean", sub_matches)) => commands::clean::execute(sub_matches),
        Some(("config", _)) => commands::config::show(),
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)
        }
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Use 'quota-tray --help' for more information.");
            Ok(())
        }
    }
}
