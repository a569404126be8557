// src/config/mod.rs
//! Roster configuration for the validator tooling
//!
//! A roster is a TOML file listing raw miner observations. It feeds the
//! `inspect` and `snapshot` commands.

/// Core configuration implementation
///
/// Contains the [`RosterConfig`] struct and its loading and template logic.
pub mod config;

// Re-export key items for easy access
pub use config::RosterConfig;

use crate::utils::error::MinerError;
use std::path::PathBuf;

/// Loads a roster from a TOML file
///
/// # Arguments
/// * `path` - Path to the roster file (anything convertible to PathBuf)
pub fn load(path: impl Into<PathBuf>) -> Result<RosterConfig, MinerError> {
    RosterConfig::load(path)
}

/// Generates a commented roster template
pub fn generate_template() -> String {
    RosterConfig::generate_template()
}
