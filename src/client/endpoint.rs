//! Logical call descriptions.
//!
//! An [`Endpoint`] describes one API call against some server: method, path,
//! headers, and how its parameters are encoded. It carries a response-type
//! marker so the client knows what to decode the body into. Endpoints are
//! immutable; they are constructed per logical call and consumed once to
//! build a concrete [`super::HttpRequestInfo`].

use std::marker::PhantomData;

use http::{HeaderMap, HeaderName, HeaderValue, Method};

use super::RequestError;

/// One ordered query-string key/value pair.
///
/// Empty values are preserved as empty (`name=`), never omitted; the DoH
/// query relies on this for its masked padding parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    /// Parameter name.
    pub name: String,
    /// Parameter value; may be empty.
    pub value: String,
}

impl QueryItem {
    /// Creates a query item with no validation.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a query item whose value is semantically required.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::EmptyQueryParam`] for an empty value and
    /// [`RequestError::SpacesInQueryParam`] for a whitespace-only value.
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Result<Self, RequestError> {
        let name = name.into();
        let value = value.into();

        if value.is_empty() {
            return Err(RequestError::EmptyQueryParam { name });
        }
        if value.trim().is_empty() {
            return Err(RequestError::SpacesInQueryParam { name });
        }

        Ok(Self { name, value })
    }
}

/// Parameter encoding of an endpoint.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Encoding {
    /// No parameters.
    #[default]
    Empty,
    /// Ordered query-string items appended to the URL.
    Query(Vec<QueryItem>),
    /// A JSON object serialized as the request body
    /// (`Content-Type: application/json`).
    JsonBody(serde_json::Map<String, serde_json::Value>),
    /// Pre-encoded bytes passed through verbatim.
    Raw(Vec<u8>),
}

/// Immutable description of a logical API call.
///
/// The type parameter `R` is the response type the body decodes into; it
/// carries the per-type success-code set (see [`super::ResponseBody`]).
#[derive(Debug)]
pub struct Endpoint<R> {
    method: Method,
    path: String,
    headers: HeaderMap,
    encoding: Encoding,
    marker: PhantomData<fn() -> R>,
}

impl<R> Endpoint<R> {
    /// Creates an endpoint with the given method and path.
    ///
    /// The path is interpreted relative to the server root; a leading slash
    /// is optional.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            encoding: Encoding::Empty,
            marker: PhantomData,
        }
    }

    /// Creates a GET endpoint.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Adds a header, replacing any previous value for the same name.
    ///
    /// Header names are unique within an endpoint; the last write wins.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets query-string encoding with the given ordered items.
    #[must_use]
    pub fn with_query(mut self, items: Vec<QueryItem>) -> Self {
        self.encoding = Encoding::Query(items);
        self
    }

    /// Sets JSON-body encoding with the given object.
    #[must_use]
    pub fn with_json_body(mut self, body: serde_json::Map<String, serde_json::Value>) -> Self {
        self.encoding = Encoding::JsonBody(body);
        self
    }

    /// Sets raw-body encoding with pre-encoded bytes.
    #[must_use]
    pub fn with_raw_body(mut self, body: Vec<u8>) -> Self {
        self.encoding = Encoding::Raw(body);
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the server-relative path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the explicit header set.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the parameter encoding.
    #[must_use]
    pub const fn encoding(&self) -> &Encoding {
        &self.encoding
    }
}

impl<R> Clone for Endpoint<R> {
    fn clone(&self) -> Self {
        Self {
            method: self.method.clone(),
            path: self.path.clone(),
            headers: self.headers.clone(),
            encoding: self.encoding.clone(),
            marker: PhantomData,
        }
    }
}
