// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the validator models
///
/// Construction and restore of a [`Miner`](crate::Miner) absorb every missing
/// or empty input into a default, so the identifier and stored-field variants
/// are the only failures the entity itself produces. The remaining variants
/// belong to the roster tooling around it.
#[derive(Error, Debug)]
pub enum MinerError {
    /// The uid could not be coerced to an integer
    #[error("Invalid uid: {0}")]
    InvalidUid(String),

    /// A stored snapshot field did not parse as its numeric kind
    #[error("Invalid snapshot field {field}: {value:?}")]
    InvalidSnapshotField {
        /// Name of the offending field
        field: String,
        /// Raw value read from the store
        value: String,
    },

    /// Roster file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MinerError {
    /// Builds an [`MinerError::InvalidSnapshotField`] from borrowed parts
    pub(crate) fn snapshot_field(field: &str, value: &str) -> Self {
        MinerError::InvalidSnapshotField {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_field_message() {
        let err = MinerError::snapshot_field("score", "abc");
        assert_eq!(err.to_string(), "Invalid snapshot field score: \"abc\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: MinerError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, MinerError::IoError(_)));
    }
}
