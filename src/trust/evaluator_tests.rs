//! Tests for `TrustEvaluator`.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::SystemTime;

use rustls::pki_types::CertificateDer;

use crate::host::Host;

use super::{CertificateChain, ChainVerifier, TrustError, TrustEvaluator};

/// Mock verifier returning a scripted sequence of outcomes and recording the
/// reference names it was asked about.
struct MockVerifier {
    results: Mutex<VecDeque<Result<(), TrustError>>>,
    names_seen: Mutex<Vec<String>>,
}

impl MockVerifier {
    fn new(results: Vec<Result<(), TrustError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            names_seen: Mutex::new(Vec::new()),
        }
    }

    fn names_seen(&self) -> Vec<String> {
        self.names_seen.lock().unwrap().clone()
    }

    fn calls(&self) -> usize {
        self.names_seen.lock().unwrap().len()
    }
}

impl ChainVerifier for &MockVerifier {
    fn verify(
        &self,
        _chain: &CertificateChain,
        reference_name: &str,
        _now: SystemTime,
    ) -> Result<(), TrustError> {
        self.names_seen
            .lock()
            .unwrap()
            .push(reference_name.to_string());
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

fn test_chain() -> CertificateChain {
    CertificateChain::new(CertificateDer::from(vec![0u8; 8]), Vec::new())
}

fn host(name: &str) -> Host {
    Host::parse(name).unwrap()
}

#[test]
fn success_on_first_attempt_verifies_once() {
    let verifier = MockVerifier::new(vec![Ok(())]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("dns.google"));

    assert!(result.is_ok());
    assert_eq!(verifier.calls(), 1);
    assert_eq!(verifier.names_seen(), vec!["dns.google"]);
}

#[test]
fn name_mismatch_falls_back_to_wildcard_name() {
    let verifier = MockVerifier::new(vec![
        Err(TrustError::NotValidForName {
            name: "static.cdn.apple.com".into(),
        }),
        Ok(()),
    ]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("static.cdn.apple.com"));

    assert!(result.is_ok());
    assert_eq!(
        verifier.names_seen(),
        vec!["static.cdn.apple.com", "*.apple.com"]
    );
}

#[test]
fn name_mismatch_without_derivable_wildcard_is_fatal() {
    let verifier = MockVerifier::new(vec![Err(TrustError::NotValidForName {
        name: "localhost".into(),
    })]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("localhost"));

    assert!(matches!(result, Err(TrustError::NotValidForName { .. })));
    assert_eq!(verifier.calls(), 1);
}

#[test]
fn recoverable_failure_then_success_on_retry_succeeds() {
    let verifier = MockVerifier::new(vec![Err(TrustError::Expired), Ok(())]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("www.google.com"));

    assert!(result.is_ok());
    assert_eq!(verifier.calls(), 2);
}

#[test]
fn recoverable_failure_repeated_on_retry_is_tolerated_by_exceptions() {
    let verifier = MockVerifier::new(vec![Err(TrustError::Expired), Err(TrustError::Expired)]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("www.google.com"));

    assert!(result.is_ok());
}

#[test]
fn retry_failing_with_different_reason_surfaces_second_reason() {
    let verifier = MockVerifier::new(vec![
        Err(TrustError::Expired),
        Err(TrustError::UnknownIssuer),
    ]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("www.google.com"));

    assert_eq!(result, Err(TrustError::UnknownIssuer));
    assert_eq!(verifier.calls(), 2);
}

#[test]
fn non_recoverable_failure_is_fatal_without_retry() {
    let verifier = MockVerifier::new(vec![Err(TrustError::UnknownIssuer)]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("www.google.com"));

    assert_eq!(result, Err(TrustError::UnknownIssuer));
    assert_eq!(verifier.calls(), 1);
}

#[test]
fn wildcard_fallback_composes_with_exception_retry() {
    // First pass: exact name mismatches, wildcard fails recoverably.
    // Retry pass: exact name mismatches again, wildcard verifies.
    let verifier = MockVerifier::new(vec![
        Err(TrustError::NotValidForName {
            name: "a.b.apple.com".into(),
        }),
        Err(TrustError::Expired),
        Err(TrustError::NotValidForName {
            name: "a.b.apple.com".into(),
        }),
        Ok(()),
    ]);
    let evaluator = TrustEvaluator::new(&verifier);

    let result = evaluator.evaluate(&test_chain(), &host("a.b.apple.com"));

    assert!(result.is_ok());
    assert_eq!(
        verifier.names_seen(),
        vec!["a.b.apple.com", "*.apple.com", "a.b.apple.com", "*.apple.com"]
    );
}
