//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

/// Failures surfaced by `serve` and `genesis`
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file, `.env` or override is invalid
    #[error("PULSE_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Writing to stdout failed
    #[error("PULSE_CLI_IO_ERROR: {0}")]
    Io(#[from] io::Error),

    /// A record could not be rendered as JSON
    #[error("PULSE_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Runtime, chain or listener could not start
    #[error("PULSE_CLI_BOOT_FAILED: {0}")]
    BootFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "PULSE_CLI_CONFIG_ERROR",
            Self::Io(_) | Self::Json(_) => "PULSE_CLI_IO_ERROR",
            Self::BootFailed(_) => "PULSE_CLI_BOOT_FAILED",
        }
    }

    /// Human-readable detail without the code prefix
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::BootFailed(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
            Self::Json(e) => format!("JSON error: {}", e),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
