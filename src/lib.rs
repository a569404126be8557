//! Subnet validator models
//!
//! This crate provides the validator-side record of a network participant:
//! - [`Miner`]: normalized construction, history reset, identity hashing
//! - [`MinerSnapshot`]: the string-valued projection kept in the statistics store
//! - Roster loading and a small inspection CLI

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Miner entity and its store snapshot
pub mod models;

/// Utility functions and error handling
pub mod utils;

/// Command-line interface definitions
pub mod cli;

/// Roster configuration management
pub mod config;

/// Shared type definitions
pub mod types;

// Core exports
pub use cli::Commands;
pub use config::RosterConfig;
pub use models::{Miner, MinerParams, MinerSnapshot};
pub use types::{RawUid, UNSET_UID};
pub use utils::{MinerError, init_logging};
