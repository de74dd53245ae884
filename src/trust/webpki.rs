//! Production chain verification backed by rustls-webpki.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rustls::CertificateError;
use rustls::client::WebPkiServerVerifier;
use rustls::client::danger::ServerCertVerifier as _;
use rustls::pki_types::{ServerName, UnixTime};

use super::{CertificateChain, ChainVerifier, TrustError};

/// Label substituted for `*` when verifying a wildcard reference name.
///
/// webpki rejects reference identities containing `*`, so `*.sld.tld` is
/// verified as `wildcard.sld.tld`: a certificate carrying the `*.sld.tld`
/// SAN matches the probe, which is exactly the tolerance the wildcard
/// fallback grants.
const WILDCARD_PROBE_LABEL: &str = "wildcard";

/// Chain verification against the Mozilla/WebPKI root store.
#[derive(Debug)]
pub struct WebPkiChainVerifier {
    inner: Arc<WebPkiServerVerifier>,
}

impl WebPkiChainVerifier {
    /// Creates a verifier over the bundled WebPKI roots.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError::Other`] if the verifier cannot be built.
    pub fn new() -> Result<Self, TrustError> {
        let mut roots = rustls::RootCertStore::empty();
        roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

        let inner = WebPkiServerVerifier::builder(Arc::new(roots))
            .build()
            .map_err(|e| TrustError::Other {
                reason: e.to_string(),
            })?;

        Ok(Self { inner })
    }
}

impl ChainVerifier for WebPkiChainVerifier {
    fn verify(
        &self,
        chain: &CertificateChain,
        reference_name: &str,
        now: SystemTime,
    ) -> Result<(), TrustError> {
        let probe = effective_reference_name(reference_name);
        let server_name = ServerName::try_from(probe.as_str())
            .map_err(|_| TrustError::Other {
                reason: format!("invalid reference name '{probe}'"),
            })?
            .to_owned();

        let instant = UnixTime::since_unix_epoch(
            now.duration_since(UNIX_EPOCH).unwrap_or_default(),
        );

        self.inner
            .verify_server_cert(
                chain.end_entity(),
                chain.intermediates(),
                &server_name,
                &[],
                instant,
            )
            .map(|_| ())
            .map_err(|e| map_verification_error(reference_name, &e))
    }
}

/// Rewrites a `*.sld.tld` wildcard into its probe form; exact names pass
/// through unchanged.
fn effective_reference_name(reference_name: &str) -> String {
    reference_name.strip_prefix("*.").map_or_else(
        || reference_name.to_string(),
        |suffix| format!("{WILDCARD_PROBE_LABEL}.{suffix}"),
    )
}

fn map_verification_error(reference_name: &str, error: &rustls::Error) -> TrustError {
    match error {
        rustls::Error::InvalidCertificate(cert_error) => match cert_error {
            CertificateError::Expired => TrustError::Expired,
            CertificateError::NotValidYet => TrustError::NotYetValid,
            CertificateError::UnknownIssuer => TrustError::UnknownIssuer,
            CertificateError::Revoked => TrustError::Revoked,
            CertificateError::NotValidForName => TrustError::NotValidForName {
                name: reference_name.to_string(),
            },
            other => TrustError::Other {
                reason: other.to_string(),
            },
        },
        other => TrustError::Other {
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_name_becomes_probe() {
        assert_eq!(
            effective_reference_name("*.google.com"),
            "wildcard.google.com"
        );
    }

    #[test]
    fn exact_name_passes_through() {
        assert_eq!(effective_reference_name("dns.google"), "dns.google");
    }

    #[test]
    fn expired_maps_to_recoverable_category() {
        let mapped = map_verification_error(
            "example.com",
            &rustls::Error::InvalidCertificate(CertificateError::Expired),
        );
        assert_eq!(mapped, TrustError::Expired);
        assert!(mapped.is_recoverable());
    }

    #[test]
    fn name_mismatch_keeps_reference_name() {
        let mapped = map_verification_error(
            "a.b.example.com",
            &rustls::Error::InvalidCertificate(CertificateError::NotValidForName),
        );
        assert_eq!(
            mapped,
            TrustError::NotValidForName {
                name: "a.b.example.com".into()
            }
        );
    }
}
