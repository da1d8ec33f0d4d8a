//! CLI module for the ledger
//!
//! Provides command-line interface for:
//! - serve: create the genesis chain and serve it over HTTP
//! - genesis: print a fresh genesis record and exit

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{genesis, load_env_file, run, run_command, serve};
pub use config::{LedgerConfig, ServeOverrides};
pub use errors::{CliError, CliResult};
pub use io::write_response;
