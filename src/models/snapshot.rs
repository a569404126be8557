// src/models/snapshot.rs
//! Persisted projection of a [`Miner`]
//!
//! The store keeps one flat string hash per miner. Network identity (ip,
//! hotkey) and session-local state (sync, suspicious, penalty factor, ip
//! occurrences) are deliberately left out.

use crate::models::miner::{Miner, MinerParams};
use crate::types::RawUid;
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

/// String-valued field map written to the statistics store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinerSnapshot {
    fields: BTreeMap<String, String>,
}

impl MinerSnapshot {
    /// Field names a snapshot carries, in store order
    pub const FIELDS: [&'static str; 12] = [
        "uid",
        "version",
        "country",
        "verified",
        "score",
        "availability_score",
        "latency_score",
        "reliability_score",
        "distribution_score",
        "challenge_successes",
        "challenge_attempts",
        "process_time",
    ];

    /// Returns the stored text for `field`, if present
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterates over `(field, value)` ordered by field name
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field is stored
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Flattens into pairs for a hash-field write
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.fields.into_iter().collect()
    }

    /// Rebuilds a miner from stored fields plus the live ip and hotkey
    ///
    /// Missing or blank fields fall back to the constructor defaults. Fields
    /// that are never persisted come back at their defaults as well.
    ///
    /// # Errors
    /// * `MinerError::InvalidUid` - If the stored uid is not numeric
    /// * `MinerError::InvalidSnapshotField` - If a numeric or flag field
    ///   does not parse
    pub fn restore(&self, ip: Option<&str>, hotkey: Option<&str>) -> Result<Miner, MinerError> {
        let params = MinerParams {
            uid: self.text("uid").map(RawUid::from),
            ip: ip.map(str::to_string),
            hotkey: hotkey.map(str::to_string),
            country: self.text("country").map(str::to_string),
            version: self.text("version").map(str::to_string),
            verified: self.flag("verified")?,
            score: self.parse("score")?,
            availability_score: self.parse("availability_score")?,
            latency_score: self.parse("latency_score")?,
            reliability_score: self.parse("reliability_score")?,
            distribution_score: self.parse("distribution_score")?,
            challenge_successes: self.parse("challenge_successes")?,
            challenge_attempts: self.parse("challenge_attempts")?,
            process_time: self.parse("process_time")?,
            ..Default::default()
        };

        Miner::new(params)
    }

    fn text(&self, field: &str) -> Option<&str> {
        self.get(field)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn parse<T: FromStr>(&self, field: &str) -> Result<Option<T>, MinerError> {
        self.text(field)
            .map(|value| {
                value
                    .parse::<T>()
                    .map_err(|_| MinerError::snapshot_field(field, value))
            })
            .transpose()
    }

    fn flag(&self, field: &str) -> Result<Option<bool>, MinerError> {
        match self.text(field) {
            None => Ok(None),
            Some("1") | Some("true") | Some("True") => Ok(Some(true)),
            Some("0") | Some("false") | Some("False") => Ok(Some(false)),
            Some(other) => Err(MinerError::snapshot_field(field, other)),
        }
    }
}

// `{:?}` keeps a fractional part or exponent on every float so the store
// never mistakes a score for an integer.
impl From<&Miner> for MinerSnapshot {
    fn from(miner: &Miner) -> Self {
        let values = [
            miner.uid.to_string(),
            miner.version.clone(),
            miner.country.clone(),
            u8::from(miner.verified).to_string(),
            format!("{:?}", miner.score),
            format!("{:?}", miner.availability_score),
            format!("{:?}", miner.latency_score),
            format!("{:?}", miner.reliability_score),
            format!("{:?}", miner.distribution_score),
            miner.challenge_successes.to_string(),
            miner.challenge_attempts.to_string(),
            format!("{:?}", miner.process_time),
        ];

        MinerSnapshot {
            fields: Self::FIELDS
                .iter()
                .map(|field| field.to_string())
                .zip(values)
                .collect(),
        }
    }
}

impl FromIterator<(String, String)> for MinerSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        MinerSnapshot {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for MinerSnapshot {
    fn from(fields: HashMap<String, String>) -> Self {
        fields.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_miner() -> Miner {
        Miner::new(
            MinerParams::new("12")
                .with_ip("10.0.0.2")
                .with_hotkey("5F3sa2TJ")
                .with_country("DE")
                .with_version("2.1.0")
                .with_verified(true)
                .with_sync(true)
                .with_suspicious(true)
                .with_penalty_factor(3)
                .with_score(0.75)
                .with_availability_score(1.0)
                .with_latency_score(0.5)
                .with_reliability_score(0.25)
                .with_distribution_score(0.125)
                .with_challenges(4, 5)
                .with_process_time(0.0000001)
                .with_ip_occurences(2),
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_field_set() {
        let snapshot = scored_miner().snapshot();

        assert_eq!(snapshot.len(), MinerSnapshot::FIELDS.len());
        for field in MinerSnapshot::FIELDS {
            assert!(snapshot.get(field).is_some(), "missing {}", field);
        }
        for excluded in [
            "ip",
            "hotkey",
            "ip_occurences",
            "sync",
            "suspicious",
            "penalty_factor",
        ] {
            assert!(snapshot.get(excluded).is_none(), "leaked {}", excluded);
        }
    }

    #[test]
    fn test_snapshot_values() {
        let snapshot = scored_miner().snapshot();

        assert_eq!(snapshot.get("uid"), Some("12"));
        assert_eq!(snapshot.get("version"), Some("2.1.0"));
        assert_eq!(snapshot.get("country"), Some("DE"));
        assert_eq!(snapshot.get("verified"), Some("1"));
        assert_eq!(snapshot.get("score"), Some("0.75"));
        assert_eq!(snapshot.get("availability_score"), Some("1.0"));
        assert_eq!(snapshot.get("challenge_successes"), Some("4"));
        assert_eq!(snapshot.get("challenge_attempts"), Some("5"));
        assert_eq!(snapshot.get("process_time"), Some("1e-7"));
    }

    #[test]
    fn test_default_snapshot() {
        let snapshot = Miner::default().snapshot();

        assert_eq!(snapshot.get("uid"), Some("-1"));
        assert_eq!(snapshot.get("verified"), Some("0"));
        assert_eq!(snapshot.get("country"), Some(""));
        assert_eq!(snapshot.get("score"), Some("0.0"));
        assert_eq!(snapshot.get("challenge_attempts"), Some("0"));
    }

    #[test]
    fn test_float_values_parse_back_exactly() {
        let mut miner = scored_miner();
        miner.score = 0.1 + 0.2;
        let snapshot = miner.snapshot();

        let parsed: f64 = snapshot.get("score").unwrap().parse().unwrap();
        assert_eq!(parsed, miner.score);
    }

    #[test]
    fn test_restore_keeps_persisted_fields() {
        let original = scored_miner();
        let restored = original
            .snapshot()
            .restore(Some("10.0.0.2"), Some("5F3sa2TJ"))
            .unwrap();

        let mut expected = original.clone();
        expected.sync = false;
        expected.suspicious = false;
        expected.penalty_factor = None;
        expected.ip_occurences = 1;
        assert_eq!(restored, expected);
    }

    #[test]
    fn test_restore_from_partial_store_record() {
        let stored: HashMap<String, String> = [
            ("uid".to_string(), "9".to_string()),
            ("verified".to_string(), "0".to_string()),
            ("score".to_string(), "".to_string()),
        ]
        .into_iter()
        .collect();

        let miner = Miner::from_snapshot(&stored.into(), None, Some("hk")).unwrap();
        assert_eq!(miner.uid, 9);
        assert_eq!(miner.hotkey.as_deref(), Some("hk"));
        assert_eq!(miner.ip, "0.0.0.0");
        assert_eq!(miner.version, "0.0.0");
        assert_eq!(miner.score, 0.0);
        assert!(!miner.verified);
    }

    #[test]
    fn test_restore_treats_blank_values_as_missing() {
        let snapshot: MinerSnapshot = [
            ("uid", " 4 "),
            ("version", "   "),
            ("verified", " 1 "),
            ("score", "  "),
            ("challenge_attempts", "\t"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let miner = snapshot.restore(None, None).unwrap();
        assert_eq!(miner.uid, 4);
        assert_eq!(miner.version, "0.0.0");
        assert!(miner.verified);
        assert_eq!(miner.score, 0.0);
        assert_eq!(miner.challenge_attempts, 0);
    }

    #[test]
    fn test_iter_is_ordered_by_field_name() {
        let snapshot = scored_miner().snapshot();
        let fields: Vec<&str> = snapshot.iter().map(|(field, _)| field).collect();

        let mut sorted = MinerSnapshot::FIELDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(fields, sorted);
        assert!(snapshot.iter().any(|pair| pair == ("uid", "12")));
    }

    #[test]
    fn test_is_empty() {
        assert!(MinerSnapshot::default().is_empty());
        assert!(!Miner::default().snapshot().is_empty());
    }

    #[test]
    fn test_restore_rejects_bad_numbers() {
        let snapshot: MinerSnapshot = [("score".to_string(), "high".to_string())]
            .into_iter()
            .collect();

        match snapshot.restore(None, None) {
            Err(MinerError::InvalidSnapshotField { field, value }) => {
                assert_eq!(field, "score");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_restore_rejects_bad_flag_and_uid() {
        let bad_flag: MinerSnapshot = [("verified".to_string(), "2".to_string())]
            .into_iter()
            .collect();
        assert!(matches!(
            bad_flag.restore(None, None),
            Err(MinerError::InvalidSnapshotField { .. })
        ));

        let bad_uid: MinerSnapshot = [("uid".to_string(), "x".to_string())]
            .into_iter()
            .collect();
        assert!(matches!(
            bad_uid.restore(None, None),
            Err(MinerError::InvalidUid(_))
        ));
    }

    #[test]
    fn test_json_is_flat_object() {
        let json = serde_json::to_value(Miner::default().snapshot()).unwrap();
        assert_eq!(json["verified"], "0");
        assert_eq!(json["uid"], "-1");
        assert!(json.get("ip").is_none());
    }

    #[test]
    fn test_into_pairs_sorted_by_field() {
        let pairs = Miner::default().snapshot().into_pairs();
        assert_eq!(pairs.len(), 12);
        assert_eq!(pairs[0].0, "availability_score");
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
