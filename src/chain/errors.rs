//! Chain error and rejection types
//!
//! Validation failures are ordinary outcomes, not errors: they are carried
//! by `LinkError`, `ChainValidationError` and `RejectReason`. `ChainError`
//! covers the conditions that stop the write path from running at all.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for chain store operations
pub type ChainResult<T> = Result<T, ChainError>;

/// Why a candidate record does not follow its reference record.
///
/// Variants are ordered the way the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    /// Candidate index is not reference index + 1
    #[error("index discontinuity: expected {expected}, found {found}")]
    IndexDiscontinuity { expected: u64, found: u64 },

    /// Candidate does not point at the reference record's hash
    #[error("broken link: predecessor hash does not match the preceding record")]
    BrokenLink,

    /// Stored hash differs from the recomputed digest
    #[error("hash mismatch: stored hash does not match record contents")]
    HashMismatch,
}

impl LinkError {
    /// Short machine-readable tag
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkError::IndexDiscontinuity { .. } => "INDEX_DISCONTINUITY",
            LinkError::BrokenLink => "BROKEN_LINK",
            LinkError::HashMismatch => "HASH_MISMATCH",
        }
    }
}

/// Why a whole sequence fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainValidationError {
    /// No records at all
    #[error("chain is empty")]
    Empty,

    /// First record is not a well-formed genesis record
    #[error("invalid genesis record: {0}")]
    BadGenesis(String),

    /// Record at `position` does not follow record at `position - 1`
    #[error("invalid record at position {position}: {source}")]
    InvalidLink {
        position: usize,
        #[source]
        source: LinkError,
    },
}

/// Why the write path refused to accept a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The candidate record failed validation against the tail
    #[error("candidate rejected: {0}")]
    InvalidCandidate(#[from] LinkError),

    /// The resolver kept the held chain instead of the extended one
    #[error("extended chain was not adopted")]
    NotAdopted,
}

impl RejectReason {
    /// Short machine-readable tag
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidCandidate(e) => e.as_str(),
            RejectReason::NotAdopted => "NOT_ADOPTED",
        }
    }
}

/// Conditions that prevent a chain operation from running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// There is no tail to extend from
    #[error("chain has no records; genesis must exist before appending")]
    EmptyChain,

    /// A writer panicked while holding the chain lock
    #[error("chain lock poisoned")]
    LockPoisoned,
}

impl ChainError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChainError::EmptyChain => StatusCode::INTERNAL_SERVER_ERROR,
            ChainError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: status.as_u16(),
            reason: None,
        }
    }
}

impl From<RejectReason> for ErrorResponse {
    fn from(reason: RejectReason) -> Self {
        Self {
            error: reason.to_string(),
            code: StatusCode::CONFLICT.as_u16(),
            reason: Some(reason.as_str().to_string()),
        }
    }
}

impl IntoResponse for ChainError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(status, self.to_string()));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_error_display() {
        let err = LinkError::IndexDiscontinuity {
            expected: 6,
            found: 7,
        };
        assert_eq!(err.to_string(), "index discontinuity: expected 6, found 7");
        assert_eq!(err.as_str(), "INDEX_DISCONTINUITY");
    }

    #[test]
    fn test_reject_reason_from_link_error() {
        let reason: RejectReason = LinkError::BrokenLink.into();
        assert_eq!(reason, RejectReason::InvalidCandidate(LinkError::BrokenLink));
        assert_eq!(reason.as_str(), "BROKEN_LINK");
        assert!(reason.to_string().contains("broken link"));
    }

    #[test]
    fn test_chain_validation_error_display() {
        let err = ChainValidationError::InvalidLink {
            position: 2,
            source: LinkError::HashMismatch,
        };
        assert!(err.to_string().contains("position 2"));
        assert!(err.to_string().contains("hash mismatch"));
    }

    #[test]
    fn test_rejection_response_body() {
        let body = ErrorResponse::from(RejectReason::NotAdopted);
        assert_eq!(body.code, 409);
        assert_eq!(body.reason.as_deref(), Some("NOT_ADOPTED"));

        let json = serde_json::to_value(ErrorResponse::new(StatusCode::BAD_REQUEST, "bad")).unwrap();
        assert_eq!(json["code"], 400);
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_chain_error_status() {
        assert_eq!(
            ChainError::EmptyChain.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ChainError::LockPoisoned.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
