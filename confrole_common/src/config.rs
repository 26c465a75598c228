//! TOML settings for role tooling.
//!
//! Any `DeserializeOwned` type can be read with [`ConfigLoader`]. Tools that
//! read an inventory or report file embed a `[shared]` table
//! ([`SharedConfig`]) naming the run and its log level.
//!
//! ```rust,no_run
//! use confrole_common::config::{ConfigError, ConfigLoader, SharedConfig};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct ReportConfig {
//!     shared: SharedConfig,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let report = ReportConfig::load(Path::new("inventory.toml"))?;
//!     report.shared.validate()?;
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to read or accept a settings file.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// No file at the given path.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but could not be read, or is not valid TOML for the
    /// expected shape. The message names the file when there is one.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Parsed, but a value is not acceptable.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Verbosity of a tool run, written in lowercase in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Every lookup and check.
    Trace,
    /// Per-configuration check results.
    Debug,
    /// Run summaries.
    #[default]
    Info,
    /// Violations only.
    Warn,
    /// Failures that stop the run.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

/// The `[shared]` table every tool file carries.
///
/// ```toml
/// [shared]
/// service_name = "java-library"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Name of the build or project the file describes; appears in logs.
    pub service_name: String,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl SharedConfig {
    /// Reject a blank `service_name`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "[shared] service_name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// TOML reading for any deserializable settings type.
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Read and parse `path`.
    ///
    /// A missing file is [`ConfigError::FileNotFound`] carrying `path`; any
    /// other I/O or TOML failure is [`ConfigError::ParseError`] prefixed
    /// with the path.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
            _ => ConfigError::ParseError(format!("{}: {e}", path.display())),
        })?;

        toml::from_str(&text)
            .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))
    }

    /// Parse TOML text that did not come from a file.
    fn from_toml(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
