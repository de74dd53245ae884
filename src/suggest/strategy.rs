//! Provider-specific suggestion strategies.

use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE};

use crate::client::{
    Endpoint, HttpError, HttpTransport, QueryItem, RequestError, RestClient, ServerDescription,
};
use crate::reachability::ReachabilityHandle;

use super::SuggestionsResponse;

/// Host of Google's suggestion endpoint.
pub const GOOGLE_SUGGEST_HOST: &str = "www.google.com";

/// Host of DuckDuckGo's suggestion endpoint.
pub const DUCKDUCKGO_SUGGEST_HOST: &str = "ac.duckduckgo.com";

/// Content type both providers use for suggestion payloads.
const SUGGESTIONS_CONTENT_TYPE: &str = "application/x-suggestions+json";

/// Trait for fetching suggestions from one backend provider.
///
/// A strategy is bound to a single provider; which one is active is an
/// external feature-flag decision
/// (see [`super::provider_from_flags`]).
pub trait AutocompleteStrategy: Send + Sync {
    /// Fetches ordered suggestions for the input text.
    ///
    /// Input validation (non-empty, non-whitespace) happens before any
    /// request object is built, with the same rules as every other
    /// query-encoded call.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for validation, connectivity, transport,
    /// status, and decode failures.
    fn suggestions(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, HttpError>> + Send;
}

fn suggestion_headers<R>(endpoint: Endpoint<R>) -> Endpoint<R> {
    endpoint
        .with_header(CONTENT_TYPE, HeaderValue::from_static(SUGGESTIONS_CONTENT_TYPE))
        .with_header(ACCEPT, HeaderValue::from_static(SUGGESTIONS_CONTENT_TYPE))
}

/// Google suggestion strategy
/// (`GET /complete/search?q=<query>&client=firefox`).
#[derive(Debug, Clone)]
pub struct GoogleAutocomplete<T> {
    client: RestClient<T>,
}

impl<T> GoogleAutocomplete<T> {
    /// Creates the strategy over the given transport.
    #[must_use]
    pub fn new(transport: T, reachability: ReachabilityHandle) -> Self {
        let server = ServerDescription::https(GOOGLE_SUGGEST_HOST)
            .expect("well-known suggestion host is a valid domain");
        Self {
            client: RestClient::new(transport, server, reachability),
        }
    }

    /// Sets the per-call timeout of the underlying client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    fn endpoint(text: &str) -> Result<Endpoint<SuggestionsResponse>, RequestError> {
        Ok(suggestion_headers(Endpoint::get("complete/search")).with_query(vec![
            QueryItem::required("q", text)?,
            QueryItem::new("client", "firefox"),
        ]))
    }
}

impl<T: HttpTransport> AutocompleteStrategy for GoogleAutocomplete<T> {
    async fn suggestions(&self, text: &str) -> Result<Vec<String>, HttpError> {
        let endpoint = Self::endpoint(text)?;
        let response = self.client.call(endpoint).await?;
        // The echoed query is discarded; only the list surfaces
        Ok(response.suggestions)
    }
}

/// DuckDuckGo suggestion strategy (`GET /ac?q=<query>&type=list`).
#[derive(Debug, Clone)]
pub struct DuckDuckGoAutocomplete<T> {
    client: RestClient<T>,
}

impl<T> DuckDuckGoAutocomplete<T> {
    /// Creates the strategy over the given transport.
    #[must_use]
    pub fn new(transport: T, reachability: ReachabilityHandle) -> Self {
        let server = ServerDescription::https(DUCKDUCKGO_SUGGEST_HOST)
            .expect("well-known suggestion host is a valid domain");
        Self {
            client: RestClient::new(transport, server, reachability),
        }
    }

    /// Sets the per-call timeout of the underlying client.
    #[must_use]
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    fn endpoint(text: &str) -> Result<Endpoint<SuggestionsResponse>, RequestError> {
        Ok(suggestion_headers(Endpoint::get("ac")).with_query(vec![
            QueryItem::required("q", text)?,
            QueryItem::new("type", "list"),
        ]))
    }
}

impl<T: HttpTransport> AutocompleteStrategy for DuckDuckGoAutocomplete<T> {
    async fn suggestions(&self, text: &str) -> Result<Vec<String>, HttpError> {
        let endpoint = Self::endpoint(text)?;
        let response = self.client.call(endpoint).await?;
        Ok(response.suggestions)
    }
}
