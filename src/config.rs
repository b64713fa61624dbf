/*!
 * Configuration types for the greeter client
 */

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ClientError, Result};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:50051";

/// Name sent in the `SayHello` request when nothing else is configured
pub const DEFAULT_NAME: &str = "Eugenio";

/// Resolved settings for a single greeting call
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Peer URI (plaintext HTTP/2)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value of `HelloRequest.name`
    #[serde(default = "default_name")]
    pub name: String,

    /// Connect timeout in seconds (None = transport default)
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,

    /// Per-request timeout in seconds (None = wait indefinitely)
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            name: default_name(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log_level: LogLevel::default(),
            log_file: None,
            verbose: false,
        }
    }
}

impl ClientConfig {
    /// Parse configuration from TOML text; missing keys fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ClientError::Config(format!("Invalid config: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Effective tracing level after applying `verbose`
    pub fn effective_log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else {
            self.log_level.to_tracing_level()
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    #[default]
    Warn,

    /// Info, warnings, and errors
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
