//! Transport trait and the production reqwest implementation.

use std::sync::Arc;

use super::{HttpError, HttpRequestInfo, RawResponse};

/// Trait for performing one HTTP exchange.
///
/// # Design
///
/// This trait abstracts the transport implementation, enabling:
/// - Dependency injection for testing with scripted transports
/// - Swapping HTTP libraries without changing the client core
/// - Exactly-one-attempt semantics: implementations perform a single
///   exchange per call and never retry internally
pub trait HttpTransport: Send + Sync {
    /// Performs the exchange described by `request`.
    ///
    /// The request's own timeout bounds the attempt; expiry surfaces as
    /// [`HttpError::Transport`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] for connect, TLS, timeout, and
    /// stream failures.
    fn send(
        &self,
        request: HttpRequestInfo,
    ) -> impl std::future::Future<Output = Result<RawResponse, HttpError>> + Send;
}

/// Production transport using reqwest.
///
/// A thin wrapper around `reqwest::Client`: connection pooling and TLS come
/// from reqwest; the per-request timeout is taken from each
/// [`HttpRequestInfo`]. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when the embedding application needs custom pooling or proxy
    /// configuration.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }

    /// Creates a transport whose TLS stack delegates server-certificate
    /// decisions to the given verifier.
    ///
    /// This is how the trust evaluator (see [`crate::trust`]) is installed:
    /// build an [`crate::trust::EvaluatorCertVerifier`] and pass it here.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Transport`] if the client cannot be constructed.
    pub fn with_cert_verifier(
        verifier: Arc<dyn rustls::client::danger::ServerCertVerifier>,
    ) -> Result<Self, HttpError> {
        let tls = rustls::ClientConfig::builder()
            .dangerous()
            .with_custom_certificate_verifier(verifier)
            .with_no_client_auth();

        let inner = reqwest::Client::builder()
            .use_preconfigured_tls(tls)
            .build()
            .map_err(|e| HttpError::Transport(Box::new(e)))?;

        Ok(Self { inner })
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequestInfo) -> Result<RawResponse, HttpError> {
        let mut builder = self
            .inner
            .request(request.method, request.url.as_str())
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::Transport(Box::new(e)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HttpError::Transport(Box::new(e)))?
            .to_vec();

        Ok(RawResponse::new(status, headers, body))
    }
}
