//! TLS server trust evaluation.
//!
//! This module provides types and traits for:
//! - Trust failure taxonomy ([`TrustError`], [`TrustExceptions`])
//! - Presented certificate chains ([`CertificateChain`])
//! - Platform chain verification seam ([`ChainVerifier`], [`WebPkiChainVerifier`])
//! - The evaluation policy ([`TrustEvaluator`])
//! - Transport wiring ([`EvaluatorCertVerifier`], [`ExpectedHosts`])
//!
//! The evaluator layers two concerns over default chain verification:
//!
//! 1. **Wildcard tolerance** — connections may be made to an IP literal
//!    (after DNS resolution by this crate) while the certificate names a
//!    domain, so evaluation always runs against the *expected domain name*,
//!    and a name mismatch falls back once to the host's `*.sld.tld`
//!    wildcard name.
//! 2. **Recoverable-failure retry** — a failure the platform marks as
//!    exception-fixable (the clock-skew class) is re-evaluated exactly once
//!    with the suggested exceptions applied; a second failure is fatal and
//!    surfaces the second reason.
//!
//! Failure is never silently suppressed: every non-success path ends in a
//! [`TrustError`] carrying the original reason.

mod chain;
mod error;
mod evaluator;
mod verifier;
mod webpki;

#[cfg(test)]
mod evaluator_tests;

pub use chain::{CertificateChain, ChainVerifier};
pub use error::{TrustError, TrustExceptions};
pub use evaluator::TrustEvaluator;
pub use verifier::{EvaluatorCertVerifier, ExpectedHosts};
pub use webpki::WebPkiChainVerifier;
