// src/types.rs
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel uid for a miner whose identifier is unknown
pub const UNSET_UID: i64 = -1;

/// Loosely-typed uid as it arrives from chain metadata, a roster file or the store
///
/// Discovery code hands uids over in whatever shape the source produced:
/// an integer from the metagraph, a string from a hash-field store, or the
/// occasional float from a JSON payload. [`RawUid::coerce`] narrows all of
/// them to the integer the [`Miner`](crate::Miner) keeps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawUid {
    /// Already an integer
    Int(i64),

    /// Floating-point value, truncated toward zero
    Float(f64),

    /// Textual value, trimmed and parsed as base-10
    Text(String),
}

impl RawUid {
    /// Coerces the raw value to an integer uid
    ///
    /// # Returns
    /// - `Ok(i64)` for integers, numeric text and finite floats within `i64` range
    /// - `Err(MinerError::InvalidUid)` otherwise
    pub fn coerce(&self) -> Result<i64, MinerError> {
        match self {
            RawUid::Int(value) => Ok(*value),
            RawUid::Float(value) => {
                let truncated = value.trunc();
                // `as` saturates; 2^63 itself is already out of range.
                if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
                    Ok(truncated as i64)
                } else {
                    Err(MinerError::InvalidUid(self.to_string()))
                }
            }
            RawUid::Text(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| MinerError::InvalidUid(text.clone())),
        }
    }
}

/// Coerces an optional raw uid, mapping absence to [`UNSET_UID`]
pub fn coerce_uid(raw: Option<&RawUid>) -> Result<i64, MinerError> {
    raw.map_or(Ok(UNSET_UID), RawUid::coerce)
}

impl fmt::Display for RawUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawUid::Int(value) => write!(f, "{}", value),
            RawUid::Float(value) => write!(f, "{:?}", value),
            RawUid::Text(text) => write!(f, "{}", text),
        }
    }
}

impl FromStr for RawUid {
    type Err = MinerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = RawUid::Text(s.to_string());
        raw.coerce().map(RawUid::Int)
    }
}

impl From<i64> for RawUid {
    fn from(value: i64) -> Self {
        RawUid::Int(value)
    }
}

impl From<i32> for RawUid {
    fn from(value: i32) -> Self {
        RawUid::Int(value.into())
    }
}

impl From<u16> for RawUid {
    fn from(value: u16) -> Self {
        RawUid::Int(value.into())
    }
}

impl From<u32> for RawUid {
    fn from(value: u32) -> Self {
        RawUid::Int(value.into())
    }
}

impl From<f64> for RawUid {
    fn from(value: f64) -> Self {
        RawUid::Float(value)
    }
}

impl From<&str> for RawUid {
    fn from(value: &str) -> Self {
        RawUid::Text(value.to_string())
    }
}

impl From<String> for RawUid {
    fn from(value: String) -> Self {
        RawUid::Text(value)
    }
}
