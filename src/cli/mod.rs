// src/cli/mod.rs
//! Command-line interface definitions

/// Argument and sub-command definitions
pub mod commands;

pub use commands::{Action, Commands, ConfigOptions, InspectOptions, SnapshotOptions};
