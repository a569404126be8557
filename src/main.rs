// src/main.rs
use clap::Parser;
use std::collections::BTreeMap;
use subnet_validator_rs::{self, *};

/// Main entry point for the validator tooling
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Delegates to appropriate subcommand handler
/// 3. Propagates any errors upward
fn main() -> Result<(), MinerError> {
    let cli = cli::Commands::parse();

    match cli.action {
        cli::Action::Inspect(opts) => inspect_roster(opts),
        cli::Action::Snapshot(opts) => print_snapshots(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Renders every miner of the roster
fn inspect_roster(opts: cli::InspectOptions) -> Result<(), MinerError> {
    if opts.verbose {
        utils::init_debug_logging();
    } else {
        utils::init_logging();
    }

    let miners = config::load(&opts.config)?.build_miners()?;
    for miner in &miners {
        if miner.has_ip_conflicts() {
            log::warn!(
                "Miner {} shares ip {} with {} participants",
                miner.uid,
                miner.ip,
                miner.ip_occurences
            );
        }
        println!("{}", miner);
    }

    Ok(())
}

/// Prints a JSON object mapping uid to snapshot
fn print_snapshots(opts: cli::SnapshotOptions) -> Result<(), MinerError> {
    utils::init_logging();

    let miners = config::load(&opts.config)?.build_miners()?;
    let snapshots: BTreeMap<i64, MinerSnapshot> = miners
        .iter()
        .map(|miner| (miner.uid, miner.snapshot()))
        .collect();

    if snapshots.len() != miners.len() {
        log::warn!(
            "Roster lists duplicate uids, keeping {} of {} snapshots",
            snapshots.len(),
            miners.len()
        );
    }

    let output = if opts.pretty {
        serde_json::to_string_pretty(&snapshots)?
    } else {
        serde_json::to_string(&snapshots)?
    };
    println!("{}", output);

    Ok(())
}

/// Writes the roster template to the requested path
fn generate_config(opts: cli::ConfigOptions) -> Result<(), MinerError> {
    let template = config::generate_template();
    std::fs::write(opts.output, template)?;
    Ok(())
}
