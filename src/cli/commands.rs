//! CLI command implementations
//!
//! Before arguments are parsed, a `.env` file in the working directory is
//! loaded into the process environment, so `PORT` may come from there.
//! Variables already set in the environment win.
//!
//! Boot order for `serve`:
//! 1. Resolve configuration
//! 2. Create the chain store with its genesis record
//! 3. Start the tokio runtime and bind the listener
//!
//! The listener is never bound before step 2 has finished, so no request can
//! observe a chain without a genesis record.

use std::path::Path;
use std::sync::Arc;

use crate::chain::{ChainStore, Record};
use crate::http_server::HttpServer;
use crate::observability::{log_event_with_fields, Event, Logger, ObservationScope, Severity};

use super::args::Command;
use super::config::{LedgerConfig, ServeOverrides};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    load_env_file(Path::new(ENV_FILE))?;
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

const ENV_FILE: &str = ".env";

/// Load `KEY=value` lines from `path` into the process environment.
///
/// A missing file is not an error. Returns true if a file was loaded.
pub fn load_env_file(path: &Path) -> CliResult<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(CliError::config_error(format!(
            "Failed to load {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            dump_chain,
        } => serve(config.as_deref(), ServeOverrides { port, dump_chain }),
        Command::Genesis => genesis(),
    }
}

/// Create the genesis chain and serve it until interrupted
pub fn serve(config_path: Option<&Path>, overrides: ServeOverrides) -> CliResult<()> {
    let scope = ObservationScope::new("BOOT");

    let config = match LedgerConfig::resolve(config_path, &overrides) {
        Ok(config) => config,
        Err(e) => {
            scope.fail(&e.message());
            return Err(e);
        }
    };
    let port = config.port.to_string();
    let dump = config.dump_chain.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("host", &config.host), ("port", &port), ("dump_chain", &dump)],
    );

    if config.dump_chain {
        Logger::set_min_severity(Severity::Trace);
    }

    let store = match boot_chain(config.dump_chain) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            scope.fail(&e.message());
            return Err(e);
        }
    };
    let server = HttpServer::with_config(config.http_config(), store);

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let err = CliError::boot_failed(format!("Failed to create tokio runtime: {}", e));
            scope.fail(&err.message());
            return Err(err);
        }
    };
    scope.complete_with_fields(&[("addr", &server.socket_addr())]);

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(Event::ServerFailed, &[("reason", &reason)]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Print a freshly created genesis record
pub fn genesis() -> CliResult<()> {
    write_response(&Record::genesis())
}

/// Build the chain store holding a verified genesis record.
fn boot_chain(dump_chain: bool) -> CliResult<ChainStore> {
    let store = ChainStore::new().with_chain_dump(dump_chain);

    let report = store
        .verify()
        .map_err(|e| CliError::boot_failed(format!("Chain unavailable: {}", e)))?;
    if !report.valid {
        return Err(CliError::boot_failed(format!(
            "Genesis chain failed validation: {}",
            report.error.unwrap_or_default()
        )));
    }

    log_event_with_fields(Event::GenesisCreated, &[("hash", &report.tail_hash)]);
    Ok(store)
}
