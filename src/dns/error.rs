//! Error types for DNS resolution.

use thiserror::Error;

use crate::client::HttpError;
use crate::host::HostError;

/// Error type for the DNS resolution use case.
///
/// Callers are expected to absorb these by falling back to the unresolved
/// original URL (see [`super::DnsResolver::resolve_or_original`]); the use
/// case itself never retries.
#[derive(Debug, Error)]
pub enum DnsError {
    /// Only http(s) URLs are resolvable.
    #[error("URL scheme must be http or https, got '{scheme}'")]
    NotHttpScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// The URL has no host component to resolve.
    #[error("URL has no host component")]
    NoHost,

    /// The URL's host failed hostname validation.
    #[error("URL host is invalid: {0}")]
    Host(#[from] HostError),

    /// The DoH query itself failed.
    #[error("DoH query failed: {0}")]
    Http(#[from] HttpError),

    /// The DoH response decoded but carried no usable address record.
    #[error("DoH response contained no usable address records")]
    NoAddressRecords,

    /// The URL could not be reconstructed after host substitution.
    #[error("Failed to rebuild URL with resolved address")]
    UrlComponents,
}
