//! # HTTP Access Surface
//!
//! Thin axum layer over the chain store.
//!
//! # Endpoints
//!
//! - `GET /` - Full chain as a JSON array
//! - `POST /` - Append a reading (`{"BPM": 82}`)
//! - `GET /verify` - Full-chain validation of the held chain
//! - `GET /health` - Health check
//! - `GET /metrics` - Ledger counters

pub mod chain_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use chain_routes::{chain_routes, ChainState};
pub use config::HttpServerConfig;
pub use server::HttpServer;
