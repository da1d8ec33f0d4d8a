//! CLI argument definitions using clap
//!
//! Commands:
//! - pulseledger serve [--config <path>] [--port <port>] [--dump-chain]
//! - pulseledger genesis

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pulseledger - an in-memory, hash-linked ledger of sensor readings
#[derive(Parser, Debug)]
#[command(name = "pulseledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the genesis chain and serve it over HTTP
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides the config file)
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Log the full chain after every accepted record
        #[arg(long)]
        dump_chain: bool,
    },

    /// Print a freshly created genesis record and exit
    Genesis,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
