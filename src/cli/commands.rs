// src/cli/commands.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Subnet validator tooling - inspect and snapshot miner rosters
#[derive(Parser, Debug)]
#[command(name = "subnet-validator")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// The action to perform (inspect a roster, print snapshots, or generate a template)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the validator binary
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Render every miner of a roster with its ip-conflict flag
    Inspect(InspectOptions),

    /// Print the store snapshot of every miner as JSON
    Snapshot(SnapshotOptions),

    /// Generate roster file template
    Config(ConfigOptions),
}

/// Options for inspecting a roster
#[derive(Parser, Debug)]
pub struct InspectOptions {
    /// Path to roster file
    #[arg(short, long, default_value = "roster.toml")]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options for printing snapshots
#[derive(Parser, Debug)]
pub struct SnapshotOptions {
    /// Path to roster file
    #[arg(short, long, default_value = "roster.toml")]
    pub config: PathBuf,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Options for generating roster files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "roster.toml")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot_command() {
        let cli = Commands::try_parse_from(["subnet-validator", "snapshot", "-c", "r.toml", "--pretty"])
            .unwrap();
        match cli.action {
            Action::Snapshot(opts) => {
                assert_eq!(opts.config, PathBuf::from("r.toml"));
                assert!(opts.pretty);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_defaults() {
        let cli = Commands::try_parse_from(["subnet-validator", "inspect"]).unwrap();
        match cli.action {
            Action::Inspect(opts) => {
                assert_eq!(opts.config, PathBuf::from("roster.toml"));
                assert!(!opts.verbose);
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }
}
