//! Concrete request construction.
//!
//! [`HttpRequestInfo::build`] is the pure transformation from
//! `(Endpoint, ServerDescription, timeout, optional bearer token)` to a
//! dispatchable request. Identical inputs always produce identical output.

use std::fmt::Write as _;
use std::time::Duration;

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};
use url::Url;

use super::endpoint::{Encoding, Endpoint};
use super::{RequestError, ServerDescription};

/// A concrete HTTP request, ready for transport dispatch.
///
/// One value is derived per HTTP attempt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequestInfo {
    /// Fully resolved request URL.
    pub url: Url,
    /// HTTP method.
    pub method: Method,
    /// Assembled headers (endpoint headers plus bearer authorization).
    pub headers: HeaderMap,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
    /// Per-attempt timeout.
    pub timeout: Duration,
}

impl HttpRequestInfo {
    /// Builds a request from an endpoint and a server descriptor.
    ///
    /// When a bearer token is supplied, an `Authorization: Bearer <token>`
    /// header is set after the endpoint's explicit headers, so the token
    /// always wins over an explicit `Authorization` header. This is a
    /// deliberate policy carried over from the authorization flow this
    /// builder originated in.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] when the URL cannot be assembled, the JSON
    /// body fails to serialize, or the bearer token is not a valid header
    /// value.
    pub fn build<R>(
        endpoint: &Endpoint<R>,
        server: &ServerDescription,
        timeout: Duration,
        bearer_token: Option<&str>,
    ) -> Result<Self, RequestError> {
        let mut url = base_url(server)?;
        url.set_path(endpoint.path().trim_start_matches('/'));

        let mut headers = endpoint.headers().clone();
        let mut body = None;

        match endpoint.encoding() {
            Encoding::Empty => {}
            Encoding::Query(items) => {
                let mut pairs = url.query_pairs_mut();
                for item in items {
                    pairs.append_pair(&item.name, &item.value);
                }
            }
            Encoding::JsonBody(map) => {
                body = Some(serde_json::to_vec(map).map_err(RequestError::JsonBody)?);
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            Encoding::Raw(bytes) => {
                body = Some(bytes.clone());
            }
        }

        if let Some(token) = bearer_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                RequestError::InvalidHeaderValue {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(Self {
            url,
            method: endpoint.method().clone(),
            headers,
            body,
            timeout,
        })
    }

    /// Renders the request URL with an explicit port
    /// (`https://dns.google:443/resolve?...`).
    ///
    /// The parsed [`Url`] normalizes well-known default ports away; this
    /// accessor restores them for logging and comparison against wire
    /// expectations.
    #[must_use]
    pub fn raw_url(&self) -> String {
        let mut raw = format!("{}://", self.url.scheme());
        if let Some(host) = self.url.host_str() {
            raw.push_str(host);
        }
        if let Some(port) = self.url.port_or_known_default() {
            let _ = write!(raw, ":{port}");
        }
        raw.push_str(self.url.path());
        if let Some(query) = self.url.query() {
            let _ = write!(raw, "?{query}");
        }
        raw
    }
}

fn base_url(server: &ServerDescription) -> Result<Url, RequestError> {
    let base = format!("{}://{}/", server.scheme().as_str(), server.host());
    Url::parse(&base).map_err(|e| RequestError::InvalidUrl {
        reason: e.to_string(),
    })
}
