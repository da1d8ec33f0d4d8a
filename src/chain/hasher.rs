//! SHA-256 record digests
//!
//! A record's digest covers, in order:
//! - index (decimal text)
//! - timestamp (as stored)
//! - value (decimal text, `-` for negatives)
//! - predecessor hash (lowercase hex, empty for genesis)
//!
//! Each field is framed as `<byte length>:<text>,` before hashing, so two
//! distinct field tuples never share an encoding. This framing is part of the
//! digest's stability contract: changing it invalidates every stored hash.

use sha2::{Digest, Sha256};

/// Length of a rendered digest in hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

/// Computes the digest of a record's fields.
///
/// This function is deterministic: the same input always produces the same output.
pub fn compute_hash(index: u64, timestamp: &str, value: i64, prev_hash: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_bytes(index, timestamp, value, prev_hash));
    format!("{:x}", hasher.finalize())
}

/// Verifies that `expected` is the digest of the given fields.
pub fn verify_hash(index: u64, timestamp: &str, value: i64, prev_hash: &str, expected: &str) -> bool {
    compute_hash(index, timestamp, value, prev_hash) == expected
}

/// Renders the fields into the byte string that gets hashed.
pub fn canonical_bytes(index: u64, timestamp: &str, value: i64, prev_hash: &str) -> Vec<u8> {
    let index = index.to_string();
    let value = value.to_string();

    let fields = [index.as_str(), timestamp, value.as_str(), prev_hash];
    let mut out = Vec::with_capacity(fields.iter().map(|f| f.len() + 8).sum());
    for field in fields {
        out.extend_from_slice(field.len().to_string().as_bytes());
        out.push(b':');
        out.extend_from_slice(field.as_bytes());
        out.push(b',');
    }
    out
}
