// src/config/config.rs
use crate::models::{Miner, MinerParams};
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Roster of raw miner observations
///
/// Each `[[miners]]` table is handed to [`Miner::new`] unchanged, so a roster
/// entry may omit anything the constructor has a default for.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Raw constructor input, one entry per participant
    #[serde(default)]
    pub miners: Vec<MinerParams>,
}

impl RosterConfig {
    /// Loads a roster from a file
    ///
    /// # Arguments
    /// * `path` - Path to the roster file (TOML format)
    ///
    /// # Returns
    /// * `Ok(RosterConfig)` - Successfully loaded roster
    /// * `Err(MinerError)` - If file couldn't be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, MinerError> {
        let path = path.into();
        let config_str = std::fs::read_to_string(&path).map_err(|e| {
            MinerError::ConfigError(format!(
                "Failed to read roster at {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::parse(&config_str)
    }

    /// Parses roster TOML text
    pub fn parse(config_str: &str) -> Result<Self, MinerError> {
        toml::from_str(config_str)
            .map_err(|e| MinerError::ConfigError(format!("Invalid roster format: {}", e)))
    }

    /// Constructs every miner in the roster, in file order
    ///
    /// Stops at the first entry whose uid cannot be coerced.
    pub fn build_miners(&self) -> Result<Vec<Miner>, MinerError> {
        let miners = self
            .miners
            .iter()
            .cloned()
            .map(Miner::new)
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Loaded {} miners from roster", miners.len());
        Ok(miners)
    }

    /// Generates a roster template string
    ///
    /// # Returns
    /// String containing a commented TOML roster with two sample miners
    pub fn generate_template() -> String {
        let mut template = String::new();
        template.push_str("# Validator miner roster\n");
        template.push_str("# Every field except uid is optional; missing values take defaults.\n\n");
        template.push_str("[[miners]]\n");
        template.push_str("# uid may be an integer or a numeric string\n");
        template.push_str("uid = 0\n");
        template.push_str("ip = \"127.0.0.1\"\n");
        template.push_str("hotkey = \"5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY\"\n");
        template.push_str("country = \"US\"\n");
        template.push_str("version = \"1.0.0\"\n");
        template.push_str("verified = true\n");
        template.push_str("score = 0.85\n");
        template.push_str("challenge_successes = 9\n");
        template.push_str("challenge_attempts = 10\n\n");
        template.push_str("[[miners]]\n");
        template.push_str("uid = \"1\"\n");
        template.push_str("ip = \"127.0.0.2\"\n");
        template.push_str("# Number of miners sharing this ip (1 = no conflict)\n");
        template.push_str("ip_occurences = 2\n");

        template
    }
}
