//! Validated hostname value type.
//!
//! This module provides [`Host`], a wrapper over a raw hostname string that
//! is validated and normalized at construction. Downstream layers (server
//! descriptors, DNS resolution, trust evaluation) rely on the invariant that
//! a `Host` is syntactically valid and never re-validate.

use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Maximum total hostname length in bytes (RFC 1035).
const MAX_HOST_LEN: usize = 253;

/// LDH label syntax: alphanumeric, interior hyphens, 1-63 bytes.
static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("label pattern is a valid regex")
});

/// Error type for hostname validation.
///
/// Raised at construction time, before the value reaches any network layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// The input was empty after trimming surrounding whitespace.
    #[error("Hostname is empty")]
    Empty,

    /// The hostname exceeds 253 bytes.
    #[error("Hostname is too long: {len} bytes (max {MAX_HOST_LEN})")]
    TooLong {
        /// Byte length of the rejected input.
        len: usize,
    },

    /// A dot-separated label violates LDH syntax or the 63-byte limit.
    #[error("Invalid hostname label '{label}'")]
    InvalidLabel {
        /// The offending label.
        label: String,
    },

    /// The name is all-numeric dotted syntax but not a valid IPv4 address.
    ///
    /// Names like `1.2.3` or `300.1.1.1` are rejected outright instead of
    /// being treated as domain names, since they can only be intended as
    /// (malformed) address literals.
    #[error("Malformed IP address literal '{host}'")]
    MalformedIpAddress {
        /// The rejected input.
        host: String,
    },
}

/// Classification of a validated host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A DNS domain name.
    Domain,
    /// An IPv4 address literal.
    Ipv4,
    /// An IPv6 address literal (with or without brackets on input).
    Ipv6,
}

/// A validated, normalized hostname.
///
/// Construction trims surrounding whitespace and validates the result against
/// URL host grammar: total length 1-253 bytes, dot-separated LDH labels of
/// 1-63 bytes, or a well-formed IP address literal.
///
/// For domain names, [`Host::second_level_domain`] and [`Host::wildcard_name`]
/// derive the `sld.tld` suffix and the `*.sld.tld` wildcard used for
/// certificate-name matching.
///
/// # Example
///
/// ```
/// use cotton_net::host::{Host, HostKind};
///
/// let host = Host::parse("www.google.com").unwrap();
/// assert_eq!(host.kind(), HostKind::Domain);
/// assert_eq!(host.wildcard_name().as_deref(), Some("*.google.com"));
///
/// assert!(Host::parse("1.2.3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Host {
    raw: String,
    kind: HostKind,
}

impl Host {
    /// Parses and validates a hostname.
    ///
    /// Surrounding whitespace is stripped before validation, so `" 1.2.3.4"`
    /// normalizes to `"1.2.3.4"`. Interior whitespace is never accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] when the input is empty, too long, contains an
    /// invalid label, or is a malformed address literal.
    pub fn parse(input: &str) -> Result<Self, HostError> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(HostError::Empty);
        }
        if trimmed.len() > MAX_HOST_LEN {
            return Err(HostError::TooLong { len: trimmed.len() });
        }

        if let Some(kind) = address_kind(trimmed)? {
            let raw = trimmed.trim_matches(['[', ']']).to_string();
            return Ok(Self { raw, kind });
        }

        for label in trimmed.split('.') {
            if !LABEL.is_match(label) {
                return Err(HostError::InvalidLabel {
                    label: label.to_string(),
                });
            }
        }

        Ok(Self {
            raw: trimmed.to_string(),
            kind: HostKind::Domain,
        })
    }

    /// Returns the normalized hostname string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the host classification.
    #[must_use]
    pub const fn kind(&self) -> HostKind {
        self.kind
    }

    /// Returns true if this host is an IP address literal.
    #[must_use]
    pub const fn is_ip_address(&self) -> bool {
        matches!(self.kind, HostKind::Ipv4 | HostKind::Ipv6)
    }

    /// Returns the second-level domain (`sld.tld`) of a domain host.
    ///
    /// Returns `None` for IP literals and single-label names.
    #[must_use]
    pub fn second_level_domain(&self) -> Option<String> {
        if self.kind != HostKind::Domain {
            return None;
        }
        let labels: Vec<&str> = self.raw.split('.').collect();
        if labels.len() < 2 {
            return None;
        }
        Some(labels[labels.len() - 2..].join("."))
    }

    /// Returns the wildcard name (`*.sld.tld`) used for certificate-name
    /// matching, if one can be derived.
    #[must_use]
    pub fn wildcard_name(&self) -> Option<String> {
        self.second_level_domain().map(|sld| format!("*.{sld}"))
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Classifies address-literal inputs.
///
/// Returns `Ok(Some(kind))` for valid literals, `Ok(None)` for names that
/// should go through domain validation, and an error for all-numeric dotted
/// names that fail IPv4 parsing.
fn address_kind(input: &str) -> Result<Option<HostKind>, HostError> {
    if input.parse::<Ipv4Addr>().is_ok() {
        return Ok(Some(HostKind::Ipv4));
    }

    let unbracketed = input.trim_matches(['[', ']']);
    if unbracketed.parse::<Ipv6Addr>().is_ok() {
        return Ok(Some(HostKind::Ipv6));
    }

    let all_numeric = input
        .split('.')
        .all(|label| !label.is_empty() && label.bytes().all(|b| b.is_ascii_digit()));
    if all_numeric {
        return Err(HostError::MalformedIpAddress {
            host: input.to_string(),
        });
    }

    Ok(None)
}
