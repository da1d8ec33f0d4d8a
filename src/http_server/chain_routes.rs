//! Chain HTTP Routes
//!
//! Read and write endpoints for the ledger. Malformed bodies are turned away
//! here and never reach the chain store.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::chain::{AppendOutcome, ChainError, ChainStore, ErrorResponse, Record, VerifyReport};

/// Chain state shared across handlers
pub struct ChainState {
    pub store: Arc<ChainStore>,
}

impl ChainState {
    pub fn new(store: Arc<ChainStore>) -> Self {
        Self { store }
    }
}

/// Body of a write request
#[derive(Debug, Deserialize)]
pub struct WriteRequest {
    #[serde(rename = "BPM", alias = "bpm")]
    pub value: i64,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

impl From<ChainError> for (StatusCode, Json<ErrorResponse>) {
    fn from(err: ChainError) -> Self {
        let status = err.status_code();
        (status, Json(ErrorResponse::new(status, err.to_string())))
    }
}

/// Create chain routes
pub fn chain_routes(state: Arc<ChainState>) -> Router {
    Router::new()
        .route("/", get(get_chain_handler).post(write_record_handler))
        .route("/verify", get(verify_chain_handler))
        .with_state(state)
}

async fn get_chain_handler(
    State(state): State<Arc<ChainState>>,
) -> Result<impl IntoResponse, HandlerError> {
    let records = state.store.snapshot()?;
    let body = serde_json::to_string_pretty(records.as_slice()).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}

async fn write_record_handler(
    State(state): State<Arc<ChainState>>,
    payload: Result<Json<WriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), HandlerError> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(StatusCode::BAD_REQUEST, rejection.body_text())),
        )
    })?;

    match state.store.append(request.value)? {
        AppendOutcome::Accepted(record) => Ok((StatusCode::CREATED, Json(record))),
        AppendOutcome::Rejected(reason) => {
            Err((StatusCode::CONFLICT, Json(ErrorResponse::from(reason))))
        }
    }
}

async fn verify_chain_handler(
    State(state): State<Arc<ChainState>>,
) -> Result<Json<VerifyReport>, HandlerError> {
    Ok(Json(state.store.verify()?))
}
