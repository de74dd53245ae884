//! The trust evaluation policy.

use crate::host::Host;
use crate::time::{Clock, SystemClock};

use super::{CertificateChain, ChainVerifier, TrustError};

/// Evaluates server trust for an expected host.
///
/// Layered over an injected [`ChainVerifier`]:
///
/// 1. Verify against the expected host name.
/// 2. On a name mismatch, fall back once to the host's `*.sld.tld` wildcard
///    name (certificates frequently wildcard the second-level domain while
///    the connection targets a deeper or IP-substituted name).
/// 3. On a recoverable failure, apply the verifier's suggested exceptions
///    and re-evaluate exactly once; if the retry fails again, surface the
///    second failure's reason.
///
/// The evaluator holds no per-evaluation state; the exception set lives only
/// for the single retry it drives.
///
/// # Type Parameters
///
/// - `V`: the chain verifier implementation
/// - `C`: the clock supplying the verification instant (defaults to
///   [`SystemClock`])
#[derive(Debug)]
pub struct TrustEvaluator<V, C = SystemClock> {
    verifier: V,
    clock: C,
}

impl<V> TrustEvaluator<V, SystemClock> {
    /// Creates an evaluator using the system clock.
    #[must_use]
    pub const fn new(verifier: V) -> Self {
        Self {
            verifier,
            clock: SystemClock,
        }
    }
}

impl<V, C> TrustEvaluator<V, C> {
    /// Replaces the clock, primarily for tests with pinned instants.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> TrustEvaluator<V, C2> {
        TrustEvaluator {
            verifier: self.verifier,
            clock,
        }
    }
}

impl<V: ChainVerifier, C: Clock> TrustEvaluator<V, C> {
    /// Evaluates the presented chain for the expected host.
    ///
    /// # Errors
    ///
    /// Returns the failure reason when neither the direct evaluation, the
    /// wildcard fallback, nor the single exception retry accepts the chain.
    pub fn evaluate(&self, chain: &CertificateChain, host: &Host) -> Result<(), TrustError> {
        let now = self.clock.now();

        match self.verify_names(chain, host, now) {
            Ok(()) => Ok(()),
            Err(first) => {
                if !first.is_recoverable() {
                    return Err(first);
                }
                let Some(exceptions) = self.verifier.suggested_exceptions(&first) else {
                    return Err(first);
                };

                tracing::debug!(host = %host, reason = %first, "retrying trust evaluation with exceptions");

                // One re-evaluation with the exceptions applied; a second
                // failure is fatal and keeps its own reason.
                match self.verify_names(chain, host, now) {
                    Ok(()) => Ok(()),
                    Err(second) if exceptions.tolerates(&second) => Ok(()),
                    Err(second) => Err(second),
                }
            }
        }
    }

    /// Verifies against the exact host, falling back once to the wildcard
    /// name on a mismatch.
    fn verify_names(
        &self,
        chain: &CertificateChain,
        host: &Host,
        now: std::time::SystemTime,
    ) -> Result<(), TrustError> {
        match self.verifier.verify(chain, host.as_str(), now) {
            Err(e) if e.is_name_mismatch() => {
                let Some(wildcard) = host.wildcard_name() else {
                    return Err(e);
                };
                self.verifier.verify(chain, &wildcard, now)
            }
            other => other,
        }
    }
}
