//! The autocomplete facade joining history and fetched suggestions.

use super::{AutocompleteStrategy, KnownDomainsSource, NoKnownDomains};

/// Combines known-domain matches with provider suggestions.
///
/// Known domains always lead the list; fetched suggestions follow with
/// duplicates removed. When the fetch fails for any reason — invalid input,
/// no connectivity, provider outage — the failure is absorbed and only the
/// known-domain matches are returned, so autocomplete as a feature never
/// fails outright.
#[derive(Debug, Clone)]
pub struct SuggestFacade<S, K = NoKnownDomains> {
    strategy: S,
    known_domains: K,
}

impl<S> SuggestFacade<S, NoKnownDomains> {
    /// Creates a facade without a history source.
    #[must_use]
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            known_domains: NoKnownDomains,
        }
    }
}

impl<S, K> SuggestFacade<S, K> {
    /// Attaches the embedder's visited-domain history.
    #[must_use]
    pub fn with_known_domains<K2>(self, known_domains: K2) -> SuggestFacade<S, K2> {
        SuggestFacade {
            strategy: self.strategy,
            known_domains,
        }
    }
}

impl<S: AutocompleteStrategy, K: KnownDomainsSource> SuggestFacade<S, K> {
    /// Returns suggestions for the input text.
    ///
    /// Never fails: fetch errors degrade to history-only results.
    pub async fn suggestions(&self, text: &str) -> Vec<String> {
        let mut results = self.known_domains.domains_matching(text.trim());

        match self.strategy.suggestions(text).await {
            Ok(fetched) => {
                for suggestion in fetched {
                    if !results.contains(&suggestion) {
                        results.push(suggestion);
                    }
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "suggestion fetch failed, serving known domains only");
            }
        }

        results
    }
}
