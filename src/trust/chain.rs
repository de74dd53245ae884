//! Presented chains and the platform verification seam.

use std::time::SystemTime;

use rustls::pki_types::CertificateDer;

use super::{TrustError, TrustExceptions};

/// The certificate chain a server presented during the handshake.
#[derive(Debug, Clone)]
pub struct CertificateChain {
    end_entity: CertificateDer<'static>,
    intermediates: Vec<CertificateDer<'static>>,
}

impl CertificateChain {
    /// Creates a chain from the end-entity certificate and intermediates.
    #[must_use]
    pub const fn new(
        end_entity: CertificateDer<'static>,
        intermediates: Vec<CertificateDer<'static>>,
    ) -> Self {
        Self {
            end_entity,
            intermediates,
        }
    }

    /// Returns the end-entity (leaf) certificate.
    #[must_use]
    pub const fn end_entity(&self) -> &CertificateDer<'static> {
        &self.end_entity
    }

    /// Returns the intermediate certificates.
    #[must_use]
    pub fn intermediates(&self) -> &[CertificateDer<'static>] {
        &self.intermediates
    }
}

/// Trait for the platform's default chain verification.
///
/// # Design
///
/// - The evaluation *policy* (wildcard fallback, exception retry) lives in
///   [`super::TrustEvaluator`]; this trait is only the underlying check
/// - Enables dependency injection for testing the policy with scripted
///   verification outcomes
/// - The production implementation is [`super::WebPkiChainVerifier`]
///
/// # Example
///
/// ```ignore
/// use cotton_net::trust::{ChainVerifier, CertificateChain, TrustError};
/// use std::time::SystemTime;
///
/// struct AlwaysExpired;
///
/// impl ChainVerifier for AlwaysExpired {
///     fn verify(
///         &self,
///         _chain: &CertificateChain,
///         _reference_name: &str,
///         _now: SystemTime,
///     ) -> Result<(), TrustError> {
///         Err(TrustError::Expired)
///     }
/// }
/// ```
pub trait ChainVerifier: Send + Sync {
    /// Verifies the chain against a reference name at the given instant.
    ///
    /// `reference_name` is either an exact hostname or a `*.sld.tld`
    /// wildcard name; implementations decide how to honor the wildcard
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError`] describing the first failure encountered.
    fn verify(
        &self,
        chain: &CertificateChain,
        reference_name: &str,
        now: SystemTime,
    ) -> Result<(), TrustError>;

    /// Returns the exceptions the platform suggests for a failure, if any.
    ///
    /// The default suggests tolerating exactly the observed category, and
    /// only for recoverable failures.
    fn suggested_exceptions(&self, failure: &TrustError) -> Option<TrustExceptions> {
        failure
            .is_recoverable()
            .then(|| TrustExceptions::tolerating(failure.clone()))
    }
}
