//! pulseledger - an in-memory, hash-linked ledger of sensor readings
//!
//! The chain core (`chain`) is usable on its own; `http_server` and `cli`
//! wrap it in an axum service and a command-line entry point.

pub mod chain;
pub mod cli;
pub mod http_server;
pub mod observability;
