//! Ledger record type
//!
//! Each record contains:
//! - Index (position in the chain, genesis is 0)
//! - Timestamp (RFC 3339, UTC)
//! - Value (the sensor reading, BPM)
//! - Hash (digest over the four fields above plus PrevHash)
//! - PrevHash (hash of the preceding record, empty for genesis)
//!
//! JSON field names follow the wire format clients already speak:
//! `Index`, `Timestamp`, `BPM`, `Hash`, `PrevHash`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::hasher::compute_hash;

/// Predecessor hash carried by the genesis record.
pub const GENESIS_PREV_HASH: &str = "";

/// Payload value of the genesis record.
pub const GENESIS_VALUE: i64 = 0;

/// A single hash-linked ledger record.
///
/// Records are built once, hashed immediately and never mutated afterwards.
/// A held chain only ever shares them behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Index")]
    pub index: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "BPM")]
    pub value: i64,
    #[serde(rename = "Hash")]
    pub hash: String,
    #[serde(rename = "PrevHash")]
    pub prev_hash: String,
}

impl Record {
    /// Build and hash a record from its fields.
    pub fn new(index: u64, timestamp: impl Into<String>, value: i64, prev_hash: impl Into<String>) -> Self {
        let timestamp = timestamp.into();
        let prev_hash = prev_hash.into();
        let hash = compute_hash(index, &timestamp, value, &prev_hash);
        Self {
            index,
            timestamp,
            value,
            hash,
            prev_hash,
        }
    }

    /// Create the genesis record stamped with the current time.
    pub fn genesis() -> Self {
        Self::genesis_at(now_timestamp())
    }

    /// Create the genesis record with an explicit timestamp.
    pub fn genesis_at(timestamp: impl Into<String>) -> Self {
        Self::new(0, timestamp, GENESIS_VALUE, GENESIS_PREV_HASH)
    }

    /// Recompute this record's digest from its current fields.
    pub fn compute_hash(&self) -> String {
        compute_hash(self.index, &self.timestamp, self.value, &self.prev_hash)
    }

    /// Returns true if the stored hash matches the fields.
    pub fn is_self_consistent(&self) -> bool {
        self.compute_hash() == self.hash
    }

    /// Returns true if this record has the shape of a genesis record.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.prev_hash == GENESIS_PREV_HASH
    }
}

/// Current wall-clock time in the canonical timestamp format.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
