//! Longest-valid-chain resolution
//!
//! This is a placeholder conflict rule, not a consensus protocol: a candidate
//! replaces the held chain only if it is strictly longer and validates from
//! genesis. Anything else leaves the held chain untouched.

use std::sync::Arc;

use super::record::Record;
use super::validator::validate_chain;

/// A shared, immutable sequence of records.
pub type Records = Arc<Vec<Record>>;

/// Which sequence the resolver picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The candidate replaced the held chain
    Adopted,
    /// The candidate was no longer than the held chain
    KeptShorter,
    /// The candidate was longer but failed validation
    KeptInvalid,
}

impl Resolution {
    /// Returns true if the candidate was adopted
    pub fn is_adopted(self) -> bool {
        matches!(self, Resolution::Adopted)
    }

    /// Short machine-readable tag
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::Adopted => "ADOPTED",
            Resolution::KeptShorter => "KEPT_SHORTER",
            Resolution::KeptInvalid => "KEPT_INVALID",
        }
    }
}

/// Decide between the held chain and a candidate.
pub fn decide(current: &[Record], candidate: &[Record]) -> Resolution {
    if candidate.len() <= current.len() {
        return Resolution::KeptShorter;
    }
    if validate_chain(candidate).is_err() {
        return Resolution::KeptInvalid;
    }
    Resolution::Adopted
}

/// Return the sequence the process should hold.
///
/// When the current chain is kept, the returned `Arc` is the same allocation
/// that was passed in.
pub fn resolve(current: Records, candidate: Records) -> Records {
    resolve_with_outcome(current, candidate).0
}

/// Like [`resolve`], also reporting why.
pub fn resolve_with_outcome(current: Records, candidate: Records) -> (Records, Resolution) {
    match decide(&current, &candidate) {
        Resolution::Adopted => (candidate, Resolution::Adopted),
        kept => (current, kept),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::extender::extend_at;

    fn chain_of(len: usize, salt: &str) -> Records {
        let mut records = vec![Record::genesis_at(format!("{}-0", salt))];
        for i in 1..len {
            let next = extend_at(records.last().unwrap(), i as i64 * 10, format!("{}-{}", salt, i));
            records.push(next);
        }
        Arc::new(records)
    }

    #[test]
    fn test_keeps_current_when_candidate_shorter() {
        let current = chain_of(3, "a");
        let candidate = chain_of(2, "b");

        let held = resolve(current.clone(), candidate);
        assert!(Arc::ptr_eq(&held, &current));
    }

    #[test]
    fn test_keeps_current_on_equal_length() {
        let current = chain_of(3, "a");
        let candidate = chain_of(3, "b");

        let (held, outcome) = resolve_with_outcome(current.clone(), candidate);
        assert!(Arc::ptr_eq(&held, &current));
        assert_eq!(outcome, Resolution::KeptShorter);
    }

    #[test]
    fn test_adopts_longer_valid_candidate() {
        let current = chain_of(2, "a");
        let candidate = chain_of(4, "b");

        let (held, outcome) = resolve_with_outcome(current, candidate.clone());
        assert!(Arc::ptr_eq(&held, &candidate));
        assert!(outcome.is_adopted());
    }

    #[test]
    fn test_refuses_longer_invalid_candidate() {
        let current = chain_of(2, "a");
        let mut corrupt = (*chain_of(5, "b")).clone();
        corrupt[3].value += 1;
        let corrupt = Arc::new(corrupt);

        let (held, outcome) = resolve_with_outcome(current.clone(), corrupt);
        assert!(Arc::ptr_eq(&held, &current));
        assert_eq!(outcome, Resolution::KeptInvalid);
    }

    #[test]
    fn test_decide_is_pure() {
        let current = chain_of(1, "a");
        let candidate = chain_of(2, "b");
        assert_eq!(decide(&current, &candidate), Resolution::Adopted);
        assert_eq!(decide(&current, &candidate), Resolution::Adopted);
        assert_eq!(current.len(), 1);
    }
}
