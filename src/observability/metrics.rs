//! Ledger counters
//!
//! - Counters only, monotonic, reset on process start
//! - Relaxed atomics; exact totals, no cross-counter consistency

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of ledger counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Records accepted by the write path
    records_appended: AtomicU64,
    /// Values whose candidate record was rejected
    appends_rejected: AtomicU64,
    /// Candidate chains that replaced the held chain
    chains_adopted: AtomicU64,
    /// Candidate chains refused by the resolver
    candidates_refused: AtomicU64,
    /// Full-chain verifications run
    verifications: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_records_appended(&self) {
        self.records_appended.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_appends_rejected(&self) {
        self.appends_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_chains_adopted(&self) {
        self.chains_adopted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_candidates_refused(&self) {
        self.candidates_refused.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_verifications(&self) {
        self.verifications.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_appended: self.records_appended.load(Ordering::Relaxed),
            appends_rejected: self.appends_rejected.load(Ordering::Relaxed),
            chains_adopted: self.chains_adopted.load(Ordering::Relaxed),
            candidates_refused: self.candidates_refused.load(Ordering::Relaxed),
            verifications: self.verifications.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_appended: u64,
    pub appends_rejected: u64,
    pub chains_adopted: u64,
    pub candidates_refused: u64,
    pub verifications: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_has_zero_values() {
        let snapshot = MetricsRegistry::new().snapshot();
        assert_eq!(snapshot.records_appended, 0);
        assert_eq!(snapshot.appends_rejected, 0);
        assert_eq!(snapshot.chains_adopted, 0);
        assert_eq!(snapshot.candidates_refused, 0);
        assert_eq!(snapshot.verifications, 0);
    }

    #[test]
    fn test_increment_counters() {
        let registry = MetricsRegistry::new();

        registry.increment_records_appended();
        registry.increment_records_appended();
        registry.increment_appends_rejected();
        registry.increment_chains_adopted();
        registry.increment_candidates_refused();
        registry.increment_verifications();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.records_appended, 2);
        assert_eq!(snapshot.appends_rejected, 1);
        assert_eq!(snapshot.chains_adopted, 1);
        assert_eq!(snapshot.candidates_refused, 1);
        assert_eq!(snapshot.verifications, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let registry = MetricsRegistry::new();
        registry.increment_records_appended();

        let json = serde_json::to_value(registry.snapshot()).unwrap();
        assert_eq!(json["records_appended"], 1);
        assert_eq!(json["verifications"], 0);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let mut handles = vec![];

        for _ in 0..10 {
            let reg = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    reg.increment_records_appended();
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot().records_appended, 1000);
    }
}
