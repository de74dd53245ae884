//! Validated configuration assembled from CLI, TOML, and defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::ServerDescription;
use crate::suggest::AutocompleteProvider;

use super::toml::TomlConfig;
use super::{Cli, ConfigError, default_config_template, defaults};

/// Fully validated runtime configuration.
///
/// Every field has passed validation; downstream code never re-checks.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Per-call timeout applied to every call.
    pub timeout: Duration,
    /// The DoH server to resolve against.
    pub doh_server: ServerDescription,
    /// The active suggestion provider.
    pub provider: AutocompleteProvider,
    /// Verbose logging requested.
    pub verbose: bool,
}

impl ValidatedConfig {
    /// Loads and validates configuration with CLI > TOML > defaults
    /// precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an explicitly given config file cannot
    /// be loaded, or any resolved value fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = load_toml(cli)?;

        let timeout_secs = cli
            .timeout
            .or(toml.client.timeout)
            .unwrap_or(defaults::TIMEOUT_SECS);
        let timeout = validate_timeout(timeout_secs)?;

        let doh_host = cli
            .doh_host
            .clone()
            .or(toml.dns.doh_host)
            .unwrap_or_else(|| defaults::DOH_HOST.to_string());
        let doh_server =
            ServerDescription::https(&doh_host).map_err(|e| ConfigError::InvalidHost {
                host: doh_host.clone(),
                reason: e.to_string(),
            })?;

        let provider = match (cli.provider, &toml.suggest.provider) {
            (Some(arg), _) => arg.into(),
            (None, Some(name)) => name.parse()?,
            (None, None) => AutocompleteProvider::default(),
        };

        Ok(Self {
            timeout,
            doh_server,
            provider,
            verbose: cli.verbose,
        })
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "config: doh={} provider={} timeout={}s",
            self.doh_server,
            self.provider.as_str(),
            self.timeout.as_secs()
        )
    }
}

/// Returns the default configuration file location, when one can be derived.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cotton-net").join("config.toml"))
}

/// Writes the default configuration template to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] when the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Loads the TOML layer: an explicit `--config` path must exist; the
/// default location is optional.
fn load_toml(cli: &Cli) -> Result<TomlConfig, ConfigError> {
    if let Some(path) = &cli.config {
        return TomlConfig::load(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => TomlConfig::load(&path),
        _ => Ok(TomlConfig::default()),
    }
}

fn validate_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    if secs > defaults::MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            reason: format!("timeout must be at most {} seconds", defaults::MAX_TIMEOUT_SECS),
        });
    }
    Ok(Duration::from_secs(secs))
}
