//! Per-site URL state with explicit IP-substitution transitions.

use std::net::IpAddr;

use url::Url;

use crate::host::Host;

use super::DnsError;

/// A site URL together with its validated host and, once resolved, the
/// address standing in for it.
///
/// Owned by a single tab/site record; mutation happens only through the
/// transition methods, so the invariant holds that a stored address always
/// corresponds to a successful resolution of [`UrlInfo::host`]. Concurrent
/// mutation is not supported; confine each value to one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlInfo {
    original: Url,
    host: Host,
    ip: Option<IpAddr>,
    substituted: Option<Url>,
}

impl UrlInfo {
    /// Creates URL state for a freshly opened site.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::NotHttpScheme`] for non-http(s) URLs,
    /// [`DnsError::NoHost`] for URLs without a host component, and a host
    /// validation error if the component is not a well-formed host.
    pub fn new(url: Url) -> Result<Self, DnsError> {
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(DnsError::NotHttpScheme {
                    scheme: other.to_string(),
                });
            }
        }

        let raw_host = url.host_str().ok_or(DnsError::NoHost)?;
        let host = Host::parse(raw_host)?;

        Ok(Self {
            original: url,
            host,
            ip: None,
            substituted: None,
        })
    }

    /// Returns the validated host of the original URL.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the resolved address, if resolution has happened.
    #[must_use]
    pub const fn ip_address(&self) -> Option<IpAddr> {
        self.ip
    }

    /// Returns the URL as originally opened.
    #[must_use]
    pub const fn original_url(&self) -> &Url {
        &self.original
    }

    /// Returns the IP-substituted URL when an address is set, else the
    /// original URL unchanged.
    #[must_use]
    pub const fn url(&self) -> &Url {
        match &self.substituted {
            Some(url) => url,
            None => &self.original,
        }
    }

    /// Transition: records a successfully resolved address and rebuilds the
    /// substituted URL, replacing only the host component.
    ///
    /// # Errors
    ///
    /// Returns [`DnsError::UrlComponents`] if the URL cannot be
    /// reconstructed around the address.
    pub fn with_ip_address(mut self, ip: IpAddr) -> Result<Self, DnsError> {
        let mut rewritten = self.original.clone();
        rewritten.set_ip_host(ip).map_err(|()| DnsError::UrlComponents)?;

        self.ip = Some(ip);
        self.substituted = Some(rewritten);
        Ok(self)
    }

    /// Transition: carries this record's resolution over to a new URL on the
    /// same host (in-site navigation). Returns `None` when the URL is not
    /// resolvable state or targets a different host, in which case the
    /// caller starts fresh.
    #[must_use]
    pub fn updated_same_host(&self, url: &Url) -> Option<Self> {
        let updated = Self::new(url.clone()).ok()?;
        if updated.host != self.host {
            return None;
        }
        match self.ip {
            Some(ip) => updated.with_ip_address(ip).ok(),
            None => Some(updated),
        }
    }
}
