//! Chain integrity core
//!
//! Components, leaves first:
//! - `record`: the immutable hash-linked record
//! - `hasher`: SHA-256 digest over a record's fields
//! - `extender`: builds the candidate that would follow a tail
//! - `validator`: per-link and full-chain checks
//! - `resolver`: longest-valid-chain rule between two sequences
//! - `store`: the lock-guarded live chain and its write path
//!
//! Everything except `store` is pure and needs no synchronization.

pub mod errors;
pub mod extender;
pub mod hasher;
pub mod record;
pub mod resolver;
pub mod store;
pub mod validator;

pub use errors::{
    ChainError, ChainResult, ChainValidationError, ErrorResponse, LinkError, RejectReason,
};
pub use extender::{extend, extend_at};
pub use hasher::{compute_hash, verify_hash};
pub use record::Record;
pub use resolver::{resolve, resolve_with_outcome, Records, Resolution};
pub use store::{AppendOutcome, ChainStore, VerifyReport};
pub use validator::{check_link, is_chain_valid, is_valid, validate_chain};
