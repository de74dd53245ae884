//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::suggest::UnknownProviderError;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid timeout value (zero or too large).
    #[error("Invalid timeout: {reason}")]
    InvalidTimeout {
        /// Reason for invalidity
        reason: String,
    },

    /// The configured DoH host is not usable as a server.
    #[error("Invalid DoH host '{host}': {reason}")]
    InvalidHost {
        /// The invalid host string
        host: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Unknown suggestion provider name.
    #[error(transparent)]
    InvalidProvider(#[from] UnknownProviderError),
}
