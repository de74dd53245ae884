//! Search-suggestion autocomplete.
//!
//! This module provides types and traits for:
//! - The shared suggestion payload shape ([`SuggestionsResponse`])
//! - Provider strategies ([`AutocompleteStrategy`], [`GoogleAutocomplete`],
//!   [`DuckDuckGoAutocomplete`])
//! - Collaborator seams ([`KnownDomainsSource`], [`FeatureFlagSource`])
//! - Provider selection ([`AutocompleteProvider`], [`provider_from_flags`])
//! - The user-facing facade ([`SuggestFacade`]) that merges known-domain
//!   matches and absorbs fetch failures

mod facade;
mod response;
mod sources;
mod strategy;

#[cfg(test)]
mod strategy_tests;

pub use facade::SuggestFacade;
pub use response::SuggestionsResponse;
pub use sources::{
    AutocompleteProvider, FeatureFlagSource, FeatureKey, KnownDomainsSource, NoKnownDomains,
    UnknownProviderError, provider_from_flags,
};
pub use strategy::{
    AutocompleteStrategy, DUCKDUCKGO_SUGGEST_HOST, DuckDuckGoAutocomplete, GOOGLE_SUGGEST_HOST,
    GoogleAutocomplete,
};
