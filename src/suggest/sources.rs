//! Collaborator seams: visited-domain history and feature flags.
//!
//! The networking core defines these traits but does not implement them;
//! the embedding application owns the history store and the flag storage.

use std::str::FromStr;

use thiserror::Error;

/// Trait for prefix search over previously-visited hostnames.
///
/// The embedder typically backs this with an in-memory trie over browsing
/// history. Used by [`super::SuggestFacade`] to surface known domains ahead
/// of fetched suggestions, and alone when fetching fails.
pub trait KnownDomainsSource: Send + Sync {
    /// Returns hostnames starting with `prefix`, most relevant first.
    fn domains_matching(&self, prefix: &str) -> Vec<String>;
}

/// A [`KnownDomainsSource`] with no history.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoKnownDomains;

impl KnownDomainsSource for NoKnownDomains {
    fn domains_matching(&self, _prefix: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Keys the networking core reads from the embedder's flag storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKey {
    /// Which autocomplete backend is active.
    WebAutocompleteProvider,
    /// Whether page loads resolve hosts over DoH.
    DnsOverHttps,
}

/// Trait for reading the embedder's feature flags.
///
/// Mirrors a key-value flag store with typed reads; unset keys return
/// `None` and the caller applies its default.
pub trait FeatureFlagSource: Send + Sync {
    /// Reads an enum-valued flag as its string representation.
    fn enum_value(&self, key: FeatureKey) -> Option<String>;

    /// Reads a boolean flag.
    fn bool_value(&self, key: FeatureKey) -> Option<bool>;
}

/// Error type for parsing a provider name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown autocomplete provider '{value}': expected google or duckduckgo")]
pub struct UnknownProviderError {
    /// The unparseable value.
    pub value: String,
}

/// The suggestion backends this crate ships strategies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutocompleteProvider {
    /// Google suggestions (the default).
    #[default]
    Google,
    /// DuckDuckGo suggestions.
    DuckDuckGo,
}

impl AutocompleteProvider {
    /// Returns the canonical flag/config value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::DuckDuckGo => "duckduckgo",
        }
    }
}

impl FromStr for AutocompleteProvider {
    type Err = UnknownProviderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "duckduckgo" | "ddg" => Ok(Self::DuckDuckGo),
            _ => Err(UnknownProviderError {
                value: value.to_string(),
            }),
        }
    }
}

/// Selects the active provider from the embedder's flags.
///
/// Unset or unparseable values fall back to the default provider rather
/// than failing autocomplete.
pub fn provider_from_flags<F: FeatureFlagSource>(flags: &F) -> AutocompleteProvider {
    flags
        .enum_value(FeatureKey::WebAutocompleteProvider)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}
