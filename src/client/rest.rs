//! The REST client core.
//!
//! One internal engine performs: reachability gate → request construction →
//! transport dispatch → success-code check → decode. Three public faces
//! expose it: [`RestClient::call`] (async/await), [`RestClient::call_future`]
//! (promise-style), and [`RestClient::call_stream`] (reactive). All three
//! produce observably identical values and errors for the same request; the
//! only difference is the suspension mechanism.

use std::time::Duration;

use super::faces::{CallFuture, CallStream};
use super::{
    Endpoint, HttpError, HttpRequestInfo, HttpTransport, ResponseBody, ServerDescription,
};
use crate::reachability::ReachabilityHandle;

/// REST client bound to one backend server.
///
/// Long-lived and cheap to clone; it holds no per-call state, so one
/// instance is safely shared across concurrent calls. Concurrent calls are
/// independent: there is no queueing, coalescing, or deduplication, and no
/// retries at this layer.
///
/// # Type Parameters
///
/// - `T`: the transport implementation ([`super::ReqwestTransport`] in
///   production, a scripted mock in tests)
#[derive(Debug, Clone)]
pub struct RestClient<T> {
    transport: T,
    server: ServerDescription,
    reachability: ReachabilityHandle,
    timeout: Duration,
}

impl<T> RestClient<T> {
    /// Default per-call timeout, sized for suggestion/DNS-style calls.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

    /// Creates a client for the given server with the default timeout.
    #[must_use]
    pub fn new(transport: T, server: ServerDescription, reachability: ReachabilityHandle) -> Self {
        Self {
            transport,
            server,
            reachability,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-call timeout applied to every call through this client.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the server this client talks to.
    #[must_use]
    pub const fn server(&self) -> &ServerDescription {
        &self.server
    }

    /// Returns the configured per-call timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<T: HttpTransport> RestClient<T> {
    /// The one engine. Every face funnels through here, so exactly one code
    /// path performs the exchange and at most one transport attempt happens
    /// per logical call.
    async fn execute<R: ResponseBody>(
        &self,
        endpoint: Endpoint<R>,
        bearer_token: Option<&str>,
    ) -> Result<R, HttpError> {
        // Sampled, never awaited: a call's timeout budget must not include
        // waiting for connectivity, and status changes after dispatch do not
        // cancel the call.
        if self.reachability.current().is_not_reachable() {
            return Err(HttpError::NoConnectivity {
                host: self.server.host().to_string(),
            });
        }

        let request = HttpRequestInfo::build(&endpoint, &self.server, self.timeout, bearer_token)?;
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = self.transport.send(request).await?;

        if !R::success_codes().contains(&response.status.as_u16()) {
            return Err(HttpError::UnexpectedStatus {
                status: response.status,
            });
        }

        R::decode(&response.body).map_err(HttpError::from)
    }

    /// Async-task face: suspends the caller until completion.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for construction, connectivity, transport,
    /// status, and decode failures.
    pub async fn call<R: ResponseBody>(&self, endpoint: Endpoint<R>) -> Result<R, HttpError> {
        self.execute(endpoint, None).await
    }

    /// Async-task face carrying a bearer token.
    ///
    /// The token is set as `Authorization: Bearer <token>` and wins over any
    /// explicit `Authorization` header on the endpoint.
    ///
    /// # Errors
    ///
    /// Same as [`RestClient::call`].
    pub async fn call_authorized<R: ResponseBody>(
        &self,
        endpoint: Endpoint<R>,
        token: &str,
    ) -> Result<R, HttpError> {
        self.execute(endpoint, Some(token)).await
    }
}

impl<T> RestClient<T>
where
    T: HttpTransport + Clone + 'static,
{
    /// Promise face: starts the call immediately, resolves exactly once.
    ///
    /// Must be called from within a tokio runtime. Dropping the returned
    /// future cancels the call without resolving.
    #[must_use]
    pub fn call_future<R>(&self, endpoint: Endpoint<R>) -> CallFuture<R, HttpError>
    where
        R: ResponseBody + 'static,
    {
        let client = self.clone();
        CallFuture::spawn(async move { client.execute(endpoint, None).await })
    }

    /// Reactive face: emits the result once, then completes.
    ///
    /// Must be called from within a tokio runtime. Dropping the stream
    /// before its item cancels the call without emitting.
    #[must_use]
    pub fn call_stream<R>(&self, endpoint: Endpoint<R>) -> CallStream<R, HttpError>
    where
        R: ResponseBody + 'static,
    {
        let client = self.clone();
        CallStream::spawn(async move { client.execute(endpoint, None).await })
    }
}
