//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Client configuration section
    #[serde(default)]
    pub client: ClientSection,

    /// DNS resolution configuration section
    #[serde(default)]
    pub dns: DnsSection,

    /// Suggestion configuration section
    #[serde(default)]
    pub suggest: SuggestSection,
}

/// Client configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
    /// Per-call timeout in seconds
    pub timeout: Option<u64>,
}

/// DNS resolution configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsSection {
    /// DNS-over-HTTPS server host
    pub doh_host: Option<String>,
}

/// Suggestion configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestSection {
    /// Suggestion provider: "google" or "duckduckgo"
    pub provider: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or contains unknown
    /// fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Returns a commented configuration template with the built-in defaults.
#[must_use]
pub const fn default_config_template() -> &'static str {
    r#"# cotton-net configuration

[client]
# Per-call timeout in seconds, applied to every call
timeout = 8

[dns]
# DNS-over-HTTPS server host
doh_host = "dns.google"

[suggest]
# Suggestion provider: "google" or "duckduckgo"
provider = "google"
"#
}
