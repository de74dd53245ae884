//! rustls wiring: the certificate verifier installed into the transport.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, PoisonError, RwLock};

use rustls::DigitallySignedStruct;
use rustls::SignatureScheme;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};

use crate::host::Host;

use super::{CertificateChain, TrustError, TrustEvaluator, WebPkiChainVerifier};

/// Registry mapping resolved IP addresses back to their original hosts.
///
/// When the DNS use case substitutes a resolved IP into a URL, the TLS layer
/// only sees the IP literal; this registry lets the verifier recover the
/// expected domain name so certificate validation checks the real domain,
/// not the peer address. Single shared instance per transport, written by
/// the resolver, read by the verifier.
#[derive(Debug, Default)]
pub struct ExpectedHosts {
    map: RwLock<HashMap<IpAddr, Host>>,
}

impl ExpectedHosts {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `ip` was resolved from `host`.
    ///
    /// A later resolution of the same address replaces the mapping.
    pub fn register(&self, ip: IpAddr, host: Host) {
        self.map
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ip, host);
    }

    /// Returns the domain expected behind a resolved address, if known.
    #[must_use]
    pub fn expected_for(&self, ip: IpAddr) -> Option<Host> {
        self.map
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ip)
            .cloned()
    }
}

/// [`ServerCertVerifier`] adapter installing the trust evaluator into a
/// rustls client configuration.
///
/// Signature verification and scheme negotiation delegate to the crypto
/// provider; only the server-certificate decision goes through the
/// evaluator.
#[derive(Debug)]
pub struct EvaluatorCertVerifier {
    evaluator: TrustEvaluator<WebPkiChainVerifier>,
    expected: Arc<ExpectedHosts>,
    provider: Arc<CryptoProvider>,
}

impl EvaluatorCertVerifier {
    /// Creates a verifier over the WebPKI roots and the given registry.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError`] if the underlying webpki verifier cannot be
    /// built.
    pub fn new(expected: Arc<ExpectedHosts>) -> Result<Self, TrustError> {
        Ok(Self {
            evaluator: TrustEvaluator::new(WebPkiChainVerifier::new()?),
            expected,
            provider: Arc::new(rustls::crypto::aws_lc_rs::default_provider()),
        })
    }

    /// Recovers the expected domain for the peer the handshake targets.
    fn expected_host(&self, server_name: &ServerName<'_>) -> Result<Host, rustls::Error> {
        let name = match server_name {
            ServerName::DnsName(dns) => dns.as_ref().to_string(),
            ServerName::IpAddress(ip) => {
                let addr = IpAddr::from(*ip);
                match self.expected.expected_for(addr) {
                    Some(host) => return Ok(host),
                    None => addr.to_string(),
                }
            }
            _ => {
                return Err(rustls::Error::General(
                    "unsupported server name type".to_string(),
                ));
            }
        };

        Host::parse(&name).map_err(|e| rustls::Error::General(e.to_string()))
    }
}

impl ServerCertVerifier for EvaluatorCertVerifier {
    fn verify_server_cert(
        &self,
        end_entity: &CertificateDer<'_>,
        intermediates: &[CertificateDer<'_>],
        server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, rustls::Error> {
        let host = self.expected_host(server_name)?;
        let chain = CertificateChain::new(
            end_entity.clone().into_owned(),
            intermediates.iter().map(|c| c.clone().into_owned()).collect(),
        );

        // The evaluator supplies its own verification instant via its clock.
        self.evaluator
            .evaluate(&chain, &host)
            .map(|()| ServerCertVerified::assertion())
            .map_err(|e| rustls::Error::General(e.to_string()))
    }

    fn verify_tls12_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls12_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn verify_tls13_signature(
        &self,
        message: &[u8],
        cert: &CertificateDer<'_>,
        dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, rustls::Error> {
        rustls::crypto::verify_tls13_signature(
            message,
            cert,
            dss,
            &self.provider.signature_verification_algorithms,
        )
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
