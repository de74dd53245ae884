//! Error types for request construction and HTTP calls.

use thiserror::Error;

use crate::trust::TrustError;

/// Error type for request construction.
///
/// These are caller-level validation errors raised synchronously, before any
/// network attempt, and are never retried.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A semantically required query parameter was constructed empty.
    #[error("Empty value for required query parameter '{name}'")]
    EmptyQueryParam {
        /// Name of the offending parameter.
        name: String,
    },

    /// A required query parameter was whitespace-only after trimming.
    #[error("Whitespace-only value for required query parameter '{name}'")]
    SpacesInQueryParam {
        /// Name of the offending parameter.
        name: String,
    },

    /// The server/path combination did not form a valid URL.
    #[error("Failed to build request URL: {reason}")]
    InvalidUrl {
        /// Reason reported by the URL parser.
        reason: String,
    },

    /// A header value (typically the bearer token) is not representable.
    #[error("Invalid header value for '{name}'")]
    InvalidHeaderValue {
        /// Header name the value was destined for.
        name: String,
    },

    /// The JSON body map failed to serialize.
    #[error("Failed to encode JSON body: {0}")]
    JsonBody(#[source] serde_json::Error),
}

/// Error type for response decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON for the declared response type.
    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed but did not have the expected shape.
    #[error("Response body has unexpected shape: {reason}")]
    Shape {
        /// Description of the mismatch.
        reason: String,
    },
}

/// Error type for one HTTP call through the REST client.
///
/// Everything a call can fail with travels through this enum, on every
/// concurrency face identically. Cancellation is not represented here;
/// cancelled calls never produce a value at all.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request construction failed before any network attempt.
    #[error("Failed to construct request: {0}")]
    Request(#[from] RequestError),

    /// Reachability reported no connectivity; no transport call was made.
    #[error("No internet connection reaching host '{host}'")]
    NoConnectivity {
        /// Host of the server the call was destined for.
        host: String,
    },

    /// The transport failed: connect, TLS handshake, timeout expiry, or a
    /// broken exchange. Timeouts are absorbed here rather than surfaced as
    /// a dedicated case.
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server trust evaluation rejected the peer.
    #[error("Server trust rejected: {0}")]
    Trust(#[from] TrustError),

    /// The response status was outside the response type's success set.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// The status the server returned.
        status: http::StatusCode,
    },

    /// The response body failed to decode into the declared type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),
}
