//! DNS-over-HTTPS resolution.
//!
//! This module provides types for:
//! - The DoH wire model ([`DohResponse`], [`DohAnswer`], [`resolve_endpoint`])
//! - Per-site URL state ([`UrlInfo`]) with explicit IP-substitution transitions
//! - The resolution use case ([`DnsResolver`]) in the same three concurrency
//!   faces as the REST client
//! - Error handling ([`DnsError`])
//!
//! Resolution rewrites a URL's host to the resolved address while the
//! original domain is threaded through to trust evaluation via
//! [`crate::trust::ExpectedHosts`], so certificate validation always checks
//! the real domain name and never the IP literal.

mod doh;
mod error;
mod resolver;
mod url_info;

#[cfg(test)]
mod resolver_tests;

pub use doh::{DohAnswer, DohResponse, GOOGLE_DNS_HOST, google_dns_server, resolve_endpoint};
pub use error::DnsError;
pub use resolver::DnsResolver;
pub use url_info::UrlInfo;
