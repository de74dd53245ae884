//! Tests for configuration validation and precedence.

use std::io::Write as _;

use crate::suggest::AutocompleteProvider;

use super::{Cli, ConfigError, ValidatedConfig, write_default_config};

fn cli(args: &[&str]) -> Cli {
    let mut full = vec!["cotton-net"];
    full.extend_from_slice(args);
    Cli::parse_from_iter(full)
}

fn temp_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn defaults_apply_when_nothing_is_given() {
    let config = ValidatedConfig::load(&cli(&[])).unwrap();

    assert_eq!(config.timeout.as_secs(), super::defaults::TIMEOUT_SECS);
    assert_eq!(config.doh_server.host().as_str(), super::defaults::DOH_HOST);
    assert_eq!(config.provider, AutocompleteProvider::Google);
    assert!(!config.verbose);
}

#[test]
fn toml_overrides_defaults() {
    let file = temp_config("[client]\ntimeout = 4\n\n[suggest]\nprovider = \"duckduckgo\"\n");
    let config =
        ValidatedConfig::load(&cli(&["--config", file.path().to_str().unwrap()])).unwrap();

    assert_eq!(config.timeout.as_secs(), 4);
    assert_eq!(config.provider, AutocompleteProvider::DuckDuckGo);
}

#[test]
fn cli_overrides_toml() {
    let file = temp_config("[client]\ntimeout = 4\n\n[dns]\ndoh_host = \"dns.example\"\n");
    let config = ValidatedConfig::load(&cli(&[
        "--config",
        file.path().to_str().unwrap(),
        "--timeout",
        "2",
        "--doh-host",
        "doh.example",
    ]))
    .unwrap();

    assert_eq!(config.timeout.as_secs(), 2);
    assert_eq!(config.doh_server.host().as_str(), "doh.example");
}

#[test]
fn zero_timeout_is_rejected() {
    let result = ValidatedConfig::load(&cli(&["--timeout", "0"]));

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn oversized_timeout_is_rejected() {
    let result = ValidatedConfig::load(&cli(&["--timeout", "301"]));

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn ip_literal_doh_host_is_rejected() {
    let result = ValidatedConfig::load(&cli(&["--doh-host", "8.8.8.8"]));

    assert!(matches!(result, Err(ConfigError::InvalidHost { .. })));
}

#[test]
fn unknown_toml_provider_is_rejected() {
    let file = temp_config("[suggest]\nprovider = \"bing\"\n");
    let result = ValidatedConfig::load(&cli(&["--config", file.path().to_str().unwrap()]));

    assert!(matches!(result, Err(ConfigError::InvalidProvider(_))));
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let result = ValidatedConfig::load(&cli(&["--config", "/nonexistent/cotton-net.toml"]));

    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn written_default_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cotton-net.toml");

    write_default_config(&path).unwrap();
    let config = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()])).unwrap();

    assert_eq!(config.timeout.as_secs(), super::defaults::TIMEOUT_SECS);
    assert_eq!(config.doh_server.host().as_str(), super::defaults::DOH_HOST);
}

#[test]
fn display_summarizes_the_configuration() {
    let config = ValidatedConfig::load(&cli(&[])).unwrap();

    let rendered = config.to_string();
    assert!(rendered.contains("dns.google"));
    assert!(rendered.contains("google"));
}
