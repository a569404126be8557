// src/models/miner.rs
//! Validator-side record of a single network participant
//!
//! A [`Miner`] is created once when a uid is first observed, mutated in place
//! by the owning registry as scoring results arrive, and [`reset`](Miner::reset)
//! when the uid is re-bound to a different participant.

use crate::models::snapshot::MinerSnapshot;
use crate::types::{RawUid, UNSET_UID, coerce_uid};
use crate::utils::error::MinerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Address recorded for a miner whose ip is unknown
pub const DEFAULT_IP: &str = "0.0.0.0";

/// Version recorded until the miner reports its own
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Raw constructor input for a [`Miner`]
///
/// Every field is optional. [`Miner::new`] substitutes the documented default
/// for anything absent; empty strings and zero numbers are treated the same
/// as absent, so an explicit `score = 0.0` and a missing score both end up 0.
/// Field meanings mirror [`Miner`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerParams {
    /// Raw identifier, coerced by [`RawUid::coerce`]
    pub uid: Option<RawUid>,
    /// Network address; empty means unknown
    pub ip: Option<String>,
    /// Identity key, kept as given
    pub hotkey: Option<String>,
    /// Geolocation code
    pub country: Option<String>,
    /// Reported software version
    pub version: Option<String>,
    /// Identity confirmed
    pub verified: Option<bool>,
    /// Chain view up to date
    pub sync: Option<bool>,
    /// Flagged as anomalous
    pub suspicious: Option<bool>,
    /// Penalty multiplier, left unset when absent
    pub penalty_factor: Option<i64>,
    /// Composite score
    pub score: Option<f64>,
    /// Availability sub-score
    pub availability_score: Option<f64>,
    /// Latency sub-score
    pub latency_score: Option<f64>,
    /// Reliability sub-score
    pub reliability_score: Option<f64>,
    /// Distribution sub-score
    pub distribution_score: Option<f64>,
    /// Challenges passed
    pub challenge_successes: Option<u64>,
    /// Challenges attempted
    pub challenge_attempts: Option<u64>,
    /// Last processing duration
    pub process_time: Option<f64>,
    /// Participants sharing the ip; absent means 1
    pub ip_occurences: Option<u32>,
}

impl MinerParams {
    /// Starts a parameter set for the given uid
    pub fn new(uid: impl Into<RawUid>) -> Self {
        MinerParams {
            uid: Some(uid.into()),
            ..Default::default()
        }
    }

    /// Sets the network address
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the identity key
    pub fn with_hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    /// Sets the geolocation code
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the reported version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the verified flag
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// Sets the sync flag
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Sets the suspicious flag
    pub fn with_suspicious(mut self, suspicious: bool) -> Self {
        self.suspicious = Some(suspicious);
        self
    }

    /// Sets the penalty multiplier
    pub fn with_penalty_factor(mut self, penalty_factor: i64) -> Self {
        self.penalty_factor = Some(penalty_factor);
        self
    }

    /// Sets the composite score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    /// Sets the availability sub-score
    pub fn with_availability_score(mut self, score: f64) -> Self {
        self.availability_score = Some(score);
        self
    }

    /// Sets the latency sub-score
    pub fn with_latency_score(mut self, score: f64) -> Self {
        self.latency_score = Some(score);
        self
    }

    /// Sets the reliability sub-score
    pub fn with_reliability_score(mut self, score: f64) -> Self {
        self.reliability_score = Some(score);
        self
    }

    /// Sets the distribution sub-score
    pub fn with_distribution_score(mut self, score: f64) -> Self {
        self.distribution_score = Some(score);
        self
    }

    /// Sets both challenge counters at once
    pub fn with_challenges(mut self, successes: u64, attempts: u64) -> Self {
        self.challenge_successes = Some(successes);
        self.challenge_attempts = Some(attempts);
        self
    }

    /// Sets the last processing duration
    pub fn with_process_time(mut self, process_time: f64) -> Self {
        self.process_time = Some(process_time);
        self
    }

    /// Sets how many participants share the ip
    pub fn with_ip_occurences(mut self, ip_occurences: u32) -> Self {
        self.ip_occurences = Some(ip_occurences);
        self
    }
}

/// One participant as tracked by the validator
///
/// Fields are public: the owning registry writes scores and flags directly
/// between construction and reset. The type carries no locking.
#[derive(Debug, Clone)]
pub struct Miner {
    /// Participant index on the subnet, [`UNSET_UID`] when unknown
    pub uid: i64,
    /// Cryptographic identity key
    pub hotkey: Option<String>,
    /// Last-known network address, never empty
    pub ip: String,
    /// Number of participants sharing `ip`
    pub ip_occurences: u32,
    /// Self-reported software version, never empty
    pub version: String,
    /// Resolved geolocation code, may be empty
    pub country: String,
    /// Composite score supplied by the scoring pass
    pub score: f64,
    /// Uptime and responsiveness
    pub availability_score: f64,
    /// Consistency of the challenge success ratio
    pub reliability_score: f64,
    /// Response speed
    pub latency_score: f64,
    /// Contribution to geographic and network diversity
    pub distribution_score: f64,
    /// Verification challenges passed
    pub challenge_successes: u64,
    /// Verification challenges attempted
    pub challenge_attempts: u64,
    /// Last measured processing duration
    pub process_time: f64,
    /// Identity and behaviour confirmed
    pub verified: bool,
    /// True when the miner's chain view is at least as recent as the validator's
    pub sync: bool,
    /// True when the miner is flagged as anomalous; its weight is forced to 0
    pub suspicious: bool,
    /// Downstream penalty multiplier, `None` when no penalty data exists
    pub penalty_factor: Option<i64>,
}

impl Default for Miner {
    fn default() -> Self {
        Miner {
            uid: UNSET_UID,
            hotkey: None,
            ip: DEFAULT_IP.to_string(),
            ip_occurences: 1,
            version: DEFAULT_VERSION.to_string(),
            country: String::new(),
            score: 0.0,
            availability_score: 0.0,
            reliability_score: 0.0,
            latency_score: 0.0,
            distribution_score: 0.0,
            challenge_successes: 0,
            challenge_attempts: 0,
            process_time: 0.0,
            verified: false,
            sync: false,
            suspicious: false,
            penalty_factor: None,
        }
    }
}

impl Miner {
    /// Builds a normalized miner from raw parameters
    ///
    /// # Returns
    /// * `Ok(Miner)` - Every absent or empty field replaced by its default
    /// * `Err(MinerError::InvalidUid)` - If the uid is present but not numeric
    pub fn new(params: MinerParams) -> Result<Self, MinerError> {
        let uid = coerce_uid(params.uid.as_ref())?;
        log::trace!("Normalized miner uid {:?} -> {}", params.uid, uid);

        Ok(Miner {
            uid,
            hotkey: params.hotkey,
            ip: non_empty_or(params.ip.as_deref(), DEFAULT_IP),
            ip_occurences: params.ip_occurences.unwrap_or(1),
            version: non_empty_or(params.version.as_deref(), DEFAULT_VERSION),
            country: non_empty_or(params.country.as_deref(), ""),
            score: params.score.unwrap_or_default(),
            availability_score: params.availability_score.unwrap_or_default(),
            reliability_score: params.reliability_score.unwrap_or_default(),
            latency_score: params.latency_score.unwrap_or_default(),
            distribution_score: params.distribution_score.unwrap_or_default(),
            challenge_successes: params.challenge_successes.unwrap_or_default(),
            challenge_attempts: params.challenge_attempts.unwrap_or_default(),
            process_time: params.process_time.unwrap_or_default(),
            verified: params.verified.unwrap_or(false),
            sync: params.sync.unwrap_or(false),
            suspicious: params.suspicious.unwrap_or(false),
            penalty_factor: params.penalty_factor,
        })
    }

    /// Builds a miner first seen on the network, with no scoring history
    pub fn with_identity(
        uid: Option<RawUid>,
        ip: Option<&str>,
        hotkey: Option<&str>,
        country: Option<&str>,
    ) -> Result<Self, MinerError> {
        Miner::new(MinerParams {
            uid,
            ip: ip.map(str::to_string),
            hotkey: hotkey.map(str::to_string),
            country: country.map(str::to_string),
            ..Default::default()
        })
    }

    /// Rebuilds a miner from a stored snapshot plus the live ip and hotkey
    ///
    /// See [`MinerSnapshot::restore`].
    pub fn from_snapshot(
        snapshot: &MinerSnapshot,
        ip: Option<&str>,
        hotkey: Option<&str>,
    ) -> Result<Self, MinerError> {
        snapshot.restore(ip, hotkey)
    }

    /// Re-binds the uid to a new participant and wipes its history
    ///
    /// `uid` and `ip_occurences` survive; every score, counter, flag and the
    /// penalty factor go back to their defaults.
    pub fn reset(&mut self, ip: Option<&str>, hotkey: Option<&str>, country: Option<&str>) {
        log::debug!(
            "Resetting miner {} ({:?} -> {:?})",
            self.uid,
            self.hotkey,
            hotkey
        );

        self.hotkey = hotkey.map(str::to_string);
        self.ip = non_empty_or(ip, DEFAULT_IP);
        self.version = DEFAULT_VERSION.to_string();
        self.country = non_empty_or(country, "");
        self.verified = false;
        self.sync = false;
        self.suspicious = false;
        self.penalty_factor = None;
        self.score = 0.0;
        self.availability_score = 0.0;
        self.reliability_score = 0.0;
        self.latency_score = 0.0;
        self.distribution_score = 0.0;
        self.challenge_successes = 0;
        self.challenge_attempts = 0;
        self.process_time = 0.0;
    }

    /// True when the ip is shared with others or no occurrence was recorded
    pub fn has_ip_conflicts(&self) -> bool {
        self.ip_occurences != 1
    }

    /// Projects the persisted subset of the miner into string fields
    pub fn snapshot(&self) -> MinerSnapshot {
        MinerSnapshot::from(self)
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

// NaN matches NaN so `Eq` stays reflexive; -0.0 matches 0.0.
fn same_f64(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl PartialEq for Miner {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
            && self.hotkey == other.hotkey
            && self.ip == other.ip
            && self.ip_occurences == other.ip_occurences
            && self.version == other.version
            && self.country == other.country
            && same_f64(self.score, other.score)
            && same_f64(self.availability_score, other.availability_score)
            && same_f64(self.reliability_score, other.reliability_score)
            && same_f64(self.latency_score, other.latency_score)
            && same_f64(self.distribution_score, other.distribution_score)
            && self.challenge_attempts == other.challenge_attempts
            && self.challenge_successes == other.challenge_successes
            && same_f64(self.process_time, other.process_time)
            && self.verified == other.verified
            && self.sync == other.sync
            && self.suspicious == other.suspicious
            && self.penalty_factor == other.penalty_factor
    }
}

impl Eq for Miner {}

// Identity fields only: scores mutate while the miner sits in a set.
impl Hash for Miner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
        self.hotkey.hash(state);
        self.ip.hash(state);
        self.version.hash(state);
        self.country.hash(state);
    }
}

impl fmt::Display for Miner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Miner(uid={}, hotkey={}, ip={}, ip_occurences={}, version={}, country={}, \
             verified={}, sync={}, suspicious={}, penalty_factor={}, score={:?}, \
             availability_score={:?}, latency_score={:?}, reliability_score={:?}, \
             distribution_score={:?}, challenge_attempts={}, challenge_successes={}, \
             process_time={:?})",
            self.uid,
            self.hotkey.as_deref().unwrap_or("None"),
            self.ip,
            self.ip_occurences,
            self.version,
            self.country,
            self.verified,
            self.sync,
            self.suspicious,
            self.penalty_factor
                .map_or_else(|| "None".to_string(), |p| p.to_string()),
            self.score,
            self.availability_score,
            self.latency_score,
            self.reliability_score,
            self.distribution_score,
            self.challenge_attempts,
            self.challenge_successes,
            self.process_time,
        )
    }
}
