// src/models/mod.rs
//! Validator data models
//!
//! - [`Miner`]: the per-participant record owned by the validator's registry
//! - [`MinerSnapshot`]: the subset of a miner written to the statistics store

/// Miner entity: construction, reset, equality and hashing
pub mod miner;

/// Store projection of a miner and its restore path
pub mod snapshot;

pub use miner::{DEFAULT_IP, DEFAULT_VERSION, Miner, MinerParams};
pub use snapshot::MinerSnapshot;
