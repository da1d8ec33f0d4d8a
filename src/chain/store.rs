//! The live chain container
//!
//! `ChainStore` is the only shared mutable state in the ledger. It holds one
//! `Arc<Vec<Record>>` behind an `RwLock`:
//! - readers clone the `Arc` and never observe a partial write
//! - the write path (read tail, extend, validate, resolve, replace) runs
//!   entirely under the write lock, so two appends can never both build on
//!   the same tail
//! - replacement swaps the whole `Arc`; records are never edited in place

use std::sync::{Arc, RwLock};

use serde::Serialize;

use crate::observability::{log_event_with_fields, Event, Logger, MetricsRegistry, Severity};

use super::errors::{ChainError, ChainResult, RejectReason};
use super::extender::extend_at;
use super::record::{now_timestamp, Record};
use super::resolver::{resolve_with_outcome, Records, Resolution};
use super::validator::{check_link, validate_chain};

/// Result of submitting a value to the write path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The new record is now the chain tail
    Accepted(Record),
    /// The chain is unchanged
    Rejected(RejectReason),
}

impl AppendOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AppendOutcome::Accepted(_))
    }
}

/// Full-chain verification summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub valid: bool,
    pub length: usize,
    pub tail_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Lock-guarded holder of the single live chain.
#[derive(Debug)]
pub struct ChainStore {
    records: RwLock<Records>,
    metrics: Arc<MetricsRegistry>,
    dump_chain: bool,
}

impl ChainStore {
    /// Create a store holding a freshly stamped genesis record.
    pub fn new() -> Self {
        Self::with_genesis_at(now_timestamp())
    }

    /// Create a store whose genesis record carries the given timestamp.
    ///
    /// Only the timestamp is caller supplied, so the held chain always
    /// starts from a valid genesis record.
    pub fn with_genesis_at(timestamp: impl Into<String>) -> Self {
        Self::from_records(vec![Record::genesis_at(timestamp)])
    }

    fn from_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
            metrics: Arc::new(MetricsRegistry::new()),
            dump_chain: false,
        }
    }

    /// Hold `records` as-is, corrupt or not.
    #[cfg(test)]
    pub(crate) fn from_records_unchecked(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }

    /// Log the whole chain after every accepted append.
    pub fn with_chain_dump(mut self, enabled: bool) -> Self {
        self.dump_chain = enabled;
        self
    }

    /// Counters updated by this store
    pub fn metrics(&self) -> &Arc<MetricsRegistry> {
        &self.metrics
    }

    /// Consistent view of the full chain.
    pub fn snapshot(&self) -> ChainResult<Records> {
        let held = self.records.read().map_err(|_| ChainError::LockPoisoned)?;
        Ok(Arc::clone(&held))
    }

    /// The current last record.
    pub fn tail(&self) -> ChainResult<Record> {
        let held = self.records.read().map_err(|_| ChainError::LockPoisoned)?;
        held.last().cloned().ok_or(ChainError::EmptyChain)
    }

    /// Number of records held.
    pub fn len(&self) -> ChainResult<usize> {
        let held = self.records.read().map_err(|_| ChainError::LockPoisoned)?;
        Ok(held.len())
    }

    /// Append a value stamped with the current time.
    pub fn append(&self, value: i64) -> ChainResult<AppendOutcome> {
        self.append_at(value, now_timestamp())
    }

    /// Append a value with an explicit timestamp.
    pub fn append_at(&self, value: i64, timestamp: impl Into<String>) -> ChainResult<AppendOutcome> {
        let mut held = self.records.write().map_err(|_| ChainError::LockPoisoned)?;
        let tail = held.last().ok_or(ChainError::EmptyChain)?;

        let candidate = extend_at(tail, value, timestamp);
        if let Err(e) = check_link(&candidate, tail) {
            return Ok(self.reject(&candidate, e.into()));
        }

        let mut extended = Vec::with_capacity(held.len() + 1);
        extended.extend(held.iter().cloned());
        extended.push(candidate.clone());

        let (chosen, resolution) = resolve_with_outcome(Arc::clone(&held), Arc::new(extended));
        if !resolution.is_adopted() {
            return Ok(self.reject(&candidate, RejectReason::NotAdopted));
        }
        *held = chosen;

        self.metrics.increment_records_appended();
        let index = candidate.index.to_string();
        let value = candidate.value.to_string();
        log_event_with_fields(
            Event::RecordAppended,
            &[("index", &index), ("value", &value), ("hash", &candidate.hash)],
        );
        if self.dump_enabled() {
            self.dump(&held);
        }

        Ok(AppendOutcome::Accepted(candidate))
    }

    /// Offer a whole candidate chain to the resolver.
    pub fn offer(&self, candidate: Vec<Record>) -> ChainResult<Resolution> {
        let mut held = self.records.write().map_err(|_| ChainError::LockPoisoned)?;

        let candidate_len = candidate.len().to_string();
        let held_len = held.len().to_string();
        let (chosen, resolution) = resolve_with_outcome(Arc::clone(&held), Arc::new(candidate));
        *held = chosen;

        let fields = [
            ("candidate_length", candidate_len.as_str()),
            ("held_length", held_len.as_str()),
            ("outcome", resolution.as_str()),
        ];
        if resolution.is_adopted() {
            self.metrics.increment_chains_adopted();
            log_event_with_fields(Event::ChainAdopted, &fields);
        } else {
            self.metrics.increment_candidates_refused();
            log_event_with_fields(Event::ChainKept, &fields);
        }

        Ok(resolution)
    }

    /// Validate the held chain from genesis to tail.
    pub fn verify(&self) -> ChainResult<VerifyReport> {
        let records = self.snapshot()?;
        self.metrics.increment_verifications();

        let result = validate_chain(&records);
        let report = VerifyReport {
            valid: result.is_ok(),
            length: records.len(),
            tail_hash: records.last().map(|r| r.hash.clone()).unwrap_or_default(),
            error: result.err().map(|e| e.to_string()),
        };

        let length = report.length.to_string();
        match &report.error {
            None => log_event_with_fields(Event::ChainVerified, &[("length", &length)]),
            Some(reason) => log_event_with_fields(
                Event::ChainCorruption,
                &[("length", &length), ("reason", reason)],
            ),
        }

        Ok(report)
    }

    fn reject(&self, candidate: &Record, reason: RejectReason) -> AppendOutcome {
        self.metrics.increment_appends_rejected();
        let index = candidate.index.to_string();
        Logger::warn(
            Event::RecordRejected.as_str(),
            &[("index", &index), ("reason", reason.as_str())],
        );
        AppendOutcome::Rejected(reason)
    }

    fn dump_enabled(&self) -> bool {
        self.dump_chain && Logger::enabled(Severity::Trace)
    }

    fn dump(&self, records: &[Record]) {
        match serde_json::to_string_pretty(records) {
            Ok(chain) => Logger::trace(Event::ChainDump.as_str(), &[("chain", &chain)]),
            Err(e) => Logger::error(Event::ChainDump.as_str(), &[("error", &e.to_string())]),
        }
    }
}

impl Default for ChainStore {
    fn default() -> Self {
        Self::new()
    }
}
