//! Trust failure taxonomy and exception sets.

use thiserror::Error;

/// Error type for trust evaluation.
///
/// The variants mirror the failure categories the underlying chain
/// verification distinguishes. [`TrustError::is_recoverable`] marks the
/// class a platform considers fixable by applying suggested exceptions and
/// re-checking once.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrustError {
    /// The certificate does not cover the reference name.
    #[error("Certificate is not valid for name '{name}'")]
    NotValidForName {
        /// The reference name evaluation ran against.
        name: String,
    },

    /// The certificate's validity period has ended.
    #[error("Certificate has expired")]
    Expired,

    /// The certificate's validity period has not begun.
    #[error("Certificate is not yet valid")]
    NotYetValid,

    /// The chain does not lead to a trusted root.
    #[error("Certificate chains to an unknown issuer")]
    UnknownIssuer,

    /// The certificate is revoked.
    #[error("Certificate has been revoked")]
    Revoked,

    /// Any other chain or verifier failure.
    #[error("Trust evaluation failed: {reason}")]
    Other {
        /// Description of the failure.
        reason: String,
    },
}

impl TrustError {
    /// Returns true for failures fixable by a one-shot exception retry.
    ///
    /// Expired / not-yet-valid are the clock-skew-shaped failures; name
    /// mismatches have their own wildcard fallback and everything else is
    /// fatal on first sight.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Expired | Self::NotYetValid)
    }

    /// Returns true for reference-name mismatches.
    #[must_use]
    pub const fn is_name_mismatch(&self) -> bool {
        matches!(self, Self::NotValidForName { .. })
    }
}

/// A set of failure categories tolerated during one re-evaluation.
///
/// The analog of a platform's "suggested trust exceptions": produced by the
/// verifier from an observed recoverable failure, applied exactly once.
#[derive(Debug, Clone, Default)]
pub struct TrustExceptions {
    tolerated: Vec<TrustError>,
}

impl TrustExceptions {
    /// Creates an exception set tolerating the given failure's category.
    #[must_use]
    pub fn tolerating(failure: TrustError) -> Self {
        Self {
            tolerated: vec![failure],
        }
    }

    /// Returns true if the failure's category is tolerated.
    ///
    /// Matching is by variant, not by payload: an exception produced for one
    /// expired certificate tolerates the expiry category as such during the
    /// single retry it is applied to.
    #[must_use]
    pub fn tolerates(&self, failure: &TrustError) -> bool {
        self.tolerated
            .iter()
            .any(|t| std::mem::discriminant(t) == std::mem::discriminant(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_class_is_recoverable() {
        assert!(TrustError::Expired.is_recoverable());
        assert!(TrustError::NotYetValid.is_recoverable());
    }

    #[test]
    fn other_failures_are_not_recoverable() {
        assert!(!TrustError::UnknownIssuer.is_recoverable());
        assert!(!TrustError::Revoked.is_recoverable());
        assert!(
            !TrustError::NotValidForName {
                name: "example.com".into()
            }
            .is_recoverable()
        );
    }

    #[test]
    fn exceptions_match_by_category() {
        let exceptions = TrustExceptions::tolerating(TrustError::Expired);

        assert!(exceptions.tolerates(&TrustError::Expired));
        assert!(!exceptions.tolerates(&TrustError::UnknownIssuer));
    }

    #[test]
    fn name_mismatch_exceptions_ignore_payload() {
        let exceptions = TrustExceptions::tolerating(TrustError::NotValidForName {
            name: "a.example.com".into(),
        });

        assert!(exceptions.tolerates(&TrustError::NotValidForName {
            name: "b.example.com".into()
        }));
    }
}
