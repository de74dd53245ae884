//! Backend server descriptors.

use std::fmt;

use thiserror::Error;

use crate::host::{Host, HostError};

/// URL scheme of a backend server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP.
    Http,
    /// HTTP over TLS.
    Https,
}

impl Scheme {
    /// Returns the scheme string without separator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns the well-known default port for this scheme.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }
}

/// Error type for server descriptor construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerError {
    /// Domain servers are addressed by name; IP literals are rejected here.
    /// (Resolved-URL rewriting accepts them, this descriptor does not.)
    #[error("Server host must be a domain name, got IP literal '{host}'")]
    IpLiteralHost {
        /// The rejected literal.
        host: String,
    },

    /// The host string failed hostname validation.
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Immutable description of a backend endpoint: validated domain host plus
/// scheme.
///
/// Constructed once per backend and shared for the lifetime of whatever uses
/// it; it holds no per-call state.
///
/// # Example
///
/// ```
/// use cotton_net::client::ServerDescription;
///
/// let dns = ServerDescription::https("dns.google").unwrap();
/// assert_eq!(dns.to_string(), "https://dns.google");
/// assert!(ServerDescription::https("8.8.8.8").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDescription {
    host: Host,
    scheme: Scheme,
}

impl ServerDescription {
    /// Creates a server descriptor from a validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::IpLiteralHost`] if the host is an IP address
    /// literal.
    pub fn new(host: Host, scheme: Scheme) -> Result<Self, ServerError> {
        if host.is_ip_address() {
            return Err(ServerError::IpLiteralHost {
                host: host.as_str().to_string(),
            });
        }
        Ok(Self { host, scheme })
    }

    /// Creates an HTTPS server descriptor from a host name string.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] if the name fails hostname validation or is an
    /// IP literal.
    pub fn https(name: &str) -> Result<Self, ServerError> {
        Self::new(Host::parse(name)?, Scheme::Https)
    }

    /// Returns the server host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the server scheme.
    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }
}

impl fmt::Display for ServerDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_builds_from_domain_name() {
        let server = ServerDescription::https("www.google.com").unwrap();
        assert_eq!(server.host().as_str(), "www.google.com");
        assert_eq!(server.scheme(), Scheme::Https);
    }

    #[test]
    fn ip_literal_is_rejected() {
        assert!(matches!(
            ServerDescription::https("8.8.8.8"),
            Err(ServerError::IpLiteralHost { .. })
        ));
    }

    #[test]
    fn invalid_host_propagates_validation_error() {
        assert!(matches!(
            ServerDescription::https("1.2.3"),
            Err(ServerError::Host(_))
        ));
    }

    #[test]
    fn default_ports_match_schemes() {
        assert_eq!(Scheme::Http.default_port(), 80);
        assert_eq!(Scheme::Https.default_port(), 443);
    }
}
