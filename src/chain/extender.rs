//! Candidate record construction
//!
//! Extending never touches the held chain. The caller decides whether the
//! candidate is accepted.

use super::record::{now_timestamp, Record};

/// Build the record that would follow `tail`, stamped with the current time.
pub fn extend(tail: &Record, value: i64) -> Record {
    extend_at(tail, value, now_timestamp())
}

/// Build the record that would follow `tail` with an explicit timestamp.
///
/// A tail at `u64::MAX` has no successor. The index wraps to 0 and the
/// validator rejects the candidate as an index discontinuity.
pub fn extend_at(tail: &Record, value: i64, timestamp: impl Into<String>) -> Record {
    Record::new(tail.index.wrapping_add(1), timestamp, value, tail.hash.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::errors::LinkError;
    use crate::chain::validator::{check_link, is_valid};

    #[test]
    fn test_extend_links_to_tail() {
        let genesis = Record::genesis_at("t0");
        let next = extend(&genesis, 82);

        assert_eq!(next.index, 1);
        assert_eq!(next.value, 82);
        assert_eq!(next.prev_hash, genesis.hash);
        assert!(next.is_self_consistent());
    }

    #[test]
    fn test_extend_does_not_modify_tail() {
        let genesis = Record::genesis_at("t0");
        let before = genesis.clone();
        let _ = extend(&genesis, 60);
        assert_eq!(genesis, before);
    }

    #[test]
    fn test_extension_always_validates() {
        let mut tail = Record::genesis_at("t0");
        for value in [-40, 0, 1, 82, 91, 255, 256, i64::MAX, i64::MIN] {
            let next = extend(&tail, value);
            assert!(is_valid(&next, &tail), "extension by {} must validate", value);
            tail = next;
        }
    }

    #[test]
    fn test_extend_at_uses_given_timestamp() {
        let genesis = Record::genesis_at("t0");
        let next = extend_at(&genesis, 91, "t1");
        assert_eq!(next.timestamp, "t1");
        assert_eq!(next, Record::new(1, "t1", 91, genesis.hash.clone()));
    }

    #[test]
    fn test_extend_past_max_index_does_not_panic() {
        let tail = Record::new(u64::MAX, "tmax", 0, "p");
        let next = extend_at(&tail, 1, "t");

        assert_eq!(next.index, 0);
        assert_eq!(
            check_link(&next, &tail),
            Err(LinkError::IndexDiscontinuity {
                expected: u64::MAX,
                found: 0,
            })
        );
    }
}
