//! The DNS resolution use case.

use std::sync::Arc;

use url::Url;

use crate::client::{CallFuture, CallStream, HttpError, HttpTransport, RestClient};
use crate::reachability::ReachabilityHandle;
use crate::trust::ExpectedHosts;

use super::doh::{google_dns_server, resolve_endpoint};
use super::{DnsError, UrlInfo};

/// Resolves a URL's host over DNS-over-HTTPS and substitutes the address
/// into the URL.
///
/// A thin composition over the REST client: extract the host, query the DoH
/// server, rewrite the host component, and record the address in the
/// [`ExpectedHosts`] registry so trust evaluation keeps checking the
/// original domain. Offered in the same three concurrency faces as the
/// client, for the same reason.
///
/// No retries: any failure surfaces as one [`DnsError`] and the caller
/// falls back to the unresolved URL
/// (see [`DnsResolver::resolve_or_original`]).
#[derive(Debug, Clone)]
pub struct DnsResolver<T> {
    client: RestClient<T>,
    expected_hosts: Option<Arc<ExpectedHosts>>,
}

impl<T> DnsResolver<T> {
    /// Creates a resolver over an existing client (already bound to a DoH
    /// server).
    #[must_use]
    pub const fn new(client: RestClient<T>) -> Self {
        Self {
            client,
            expected_hosts: None,
        }
    }

    /// Creates a resolver against Google's DoH JSON endpoint.
    #[must_use]
    pub fn google(transport: T, reachability: ReachabilityHandle) -> Self {
        Self::new(RestClient::new(transport, google_dns_server(), reachability))
    }

    /// Registers resolved addresses in the given registry, which the
    /// transport's trust verifier should share.
    #[must_use]
    pub fn with_expected_hosts(mut self, hosts: Arc<ExpectedHosts>) -> Self {
        self.expected_hosts = Some(hosts);
        self
    }
}

impl<T: HttpTransport> DnsResolver<T> {
    /// Async-task face: resolves `url`'s host and returns the URL with the
    /// address substituted in.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError`] for non-http(s) schemes, missing or invalid
    /// hosts, failed DoH queries, answerless responses, and URL
    /// reconstruction failures. Non-resolvable inputs fail before any
    /// network attempt.
    pub async fn resolve(&self, url: &Url) -> Result<Url, DnsError> {
        let info = UrlInfo::new(url.clone())?;
        let endpoint = resolve_endpoint(info.host()).map_err(HttpError::from)?;

        let response = self.client.call(endpoint).await?;
        let ip = response.first_address().ok_or(DnsError::NoAddressRecords)?;

        if let Some(hosts) = &self.expected_hosts {
            hosts.register(ip, info.host().clone());
        }

        let info = info.with_ip_address(ip)?;
        Ok(info.url().clone())
    }

    /// Resolves `url`, falling back to the original on any failure.
    ///
    /// This is the caller-facing behavior for page loads: resolution failure
    /// must not fail the load, so the failure is logged and absorbed. The
    /// failed DoH query is never retried here.
    pub async fn resolve_or_original(&self, url: &Url) -> Url {
        match self.resolve(url).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "DNS resolution failed, using original URL");
                url.clone()
            }
        }
    }
}

impl<T> DnsResolver<T>
where
    T: HttpTransport + Clone + 'static,
{
    /// Promise face of [`DnsResolver::resolve`].
    ///
    /// Must be called from within a tokio runtime. Dropping the future
    /// cancels the resolution without resolving.
    #[must_use]
    pub fn resolve_future(&self, url: Url) -> CallFuture<Url, DnsError> {
        let resolver = self.clone();
        CallFuture::spawn(async move { resolver.resolve(&url).await })
    }

    /// Reactive face of [`DnsResolver::resolve`].
    ///
    /// Must be called from within a tokio runtime. Dropping the stream
    /// before its item cancels the resolution without emitting.
    #[must_use]
    pub fn resolve_stream(&self, url: Url) -> CallStream<Url, DnsError> {
        let resolver = self.clone();
        CallStream::spawn(async move { resolver.resolve(&url).await })
    }
}
