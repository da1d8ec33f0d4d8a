//! Record and chain validation
//!
//! A candidate follows a reference record when, checked in this order:
//! 1. its index is the reference index + 1
//! 2. its PrevHash equals the reference record's Hash
//! 3. its Hash equals the digest recomputed from its own fields
//!
//! The first failing check decides the outcome. Invalidity is a normal
//! result here; nothing in this module panics or escalates.

use super::errors::{ChainValidationError, LinkError};
use super::record::Record;

/// Run the three link checks and report the first failure.
pub fn check_link(candidate: &Record, reference: &Record) -> Result<(), LinkError> {
    match reference.index.checked_add(1) {
        Some(expected) if expected == candidate.index => {}
        _ => {
            return Err(LinkError::IndexDiscontinuity {
                expected: reference.index.saturating_add(1),
                found: candidate.index,
            })
        }
    }

    if reference.hash != candidate.prev_hash {
        return Err(LinkError::BrokenLink);
    }

    if !candidate.is_self_consistent() {
        return Err(LinkError::HashMismatch);
    }

    Ok(())
}

/// Returns true if `candidate` may directly follow `reference`.
pub fn is_valid(candidate: &Record, reference: &Record) -> bool {
    check_link(candidate, reference).is_ok()
}

/// Validate an entire sequence from its genesis record onwards.
///
/// Cost is linear in the number of records.
pub fn validate_chain(records: &[Record]) -> Result<(), ChainValidationError> {
    let genesis = records.first().ok_or(ChainValidationError::Empty)?;
    check_genesis(genesis)?;

    for (position, pair) in records.windows(2).enumerate() {
        check_link(&pair[1], &pair[0]).map_err(|source| ChainValidationError::InvalidLink {
            position: position + 1,
            source,
        })?;
    }

    Ok(())
}

/// Returns true if the whole sequence is a valid chain.
pub fn is_chain_valid(records: &[Record]) -> bool {
    validate_chain(records).is_ok()
}

fn check_genesis(genesis: &Record) -> Result<(), ChainValidationError> {
    if genesis.index != 0 {
        return Err(ChainValidationError::BadGenesis(format!(
            "index is {}, expected 0",
            genesis.index
        )));
    }
    if !genesis.is_genesis() {
        return Err(ChainValidationError::BadGenesis(
            "predecessor hash must be empty".to_string(),
        ));
    }
    if !genesis.is_self_consistent() {
        return Err(ChainValidationError::BadGenesis(
            "stored hash does not match record contents".to_string(),
        ));
    }
    Ok(())
}
