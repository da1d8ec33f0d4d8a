//! Ledger configuration
//!
//! Sources, highest precedence first:
//! 1. `--port` flag or the `PORT` environment variable (which `.env` may set)
//! 2. JSON config file given with `--config`
//! 3. Built-in defaults
//!
//! Every file field is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::config::{default_host, default_port, default_request_timeout_secs};
use crate::http_server::HttpServerConfig;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log the full chain after every accepted record
    #[serde(default)]
    pub dump_chain: bool,

    /// CORS allowed origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeOverrides {
    pub port: Option<u16>,
    pub dump_chain: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dump_chain: false,
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: LedgerConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the effective configuration from an optional file and overrides
    pub fn resolve(path: Option<&Path>, overrides: &ServeOverrides) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(port) = overrides.port {
            config.port = port;
        }
        config.dump_chain |= overrides.dump_chain;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }
        if self.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }
        if self.request_timeout_secs == 0 {
            return Err(CliError::config_error("request_timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Listener settings for the HTTP server
    pub fn http_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = LedgerConfig::resolve(None, &ServeOverrides::default()).unwrap();
        assert_eq!(config, LedgerConfig::default());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_load_partial_file() {
        let file = config_file(r#"{"port": 4000, "dump_chain": true}"#);
        let config = LedgerConfig::load(file.path()).unwrap();

        assert_eq!(config.port, 4000);
        assert!(config.dump_chain);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_port_override_wins_over_file() {
        let file = config_file(r#"{"port": 4000}"#);
        let overrides = ServeOverrides {
            port: Some(5000),
            dump_chain: false,
        };
        let config = LedgerConfig::resolve(Some(file.path()), &overrides).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_rejects_zero_port() {
        let file = config_file(r#"{"port": 0}"#);
        let err = LedgerConfig::load(file.path()).unwrap_err();
        assert!(err.message().contains("port"));

        let overrides = ServeOverrides {
            port: Some(0),
            dump_chain: false,
        };
        assert!(LedgerConfig::resolve(None, &overrides).is_err());
    }

    #[test]
    fn test_timeout_defaults_and_rejects_zero() {
        assert_eq!(LedgerConfig::default().request_timeout_secs, 10);

        let file = config_file(r#"{"request_timeout_secs": 0}"#);
        let err = LedgerConfig::load(file.path()).unwrap_err();
        assert!(err.message().contains("request_timeout_secs"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let file = config_file("{port: }");
        let err = LedgerConfig::load(file.path()).unwrap_err();
        assert!(err.message().contains("Invalid config JSON"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = LedgerConfig::load(Path::new("/nonexistent/pulseledger.json")).unwrap_err();
        assert!(err.message().contains("Failed to read config"));
    }

    #[test]
    fn test_http_config_carries_listener_settings() {
        let config = LedgerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            dump_chain: false,
            cors_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 30,
        };
        let http = config.http_config();
        assert_eq!(http.socket_addr(), "127.0.0.1:9000");
        assert_eq!(http.cors_origins.len(), 1);
        assert_eq!(http.request_timeout_secs, 30);
    }
}
