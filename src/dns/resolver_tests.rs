//! Tests for `DnsResolver`.

use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use http::{HeaderMap, StatusCode};
use tokio_stream::StreamExt;
use url::Url;

use crate::client::{HttpError, HttpRequestInfo, HttpTransport, RawResponse};
use crate::reachability::ReachabilityHandle;
use crate::trust::ExpectedHosts;

use super::{DnsError, DnsResolver};

/// Mock transport returning a scripted sequence of responses and recording
/// every request it dispatches.
#[derive(Debug, Clone)]
struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, HttpError>>>>,
    requests: Arc<Mutex<Vec<HttpRequestInfo>>>,
}

impl MockTransport {
    fn new(responses: Vec<Result<RawResponse, HttpError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn answering(body: &str) -> Self {
        Self::new(vec![Ok(RawResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            body.as_bytes().to_vec(),
        ))])
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn captured_requests(&self) -> Vec<HttpRequestInfo> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequestInfo) -> Result<RawResponse, HttpError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(HttpError::Transport(Box::new(std::io::Error::other(
                    "script exhausted",
                ))))
            })
    }
}

const ANSWER: &str = r#"{
    "Status": 0,
    "Answer": [{"name": "www.example.com.", "type": 1, "TTL": 300, "data": "93.184.216.34"}]
}"#;

fn resolver(transport: MockTransport) -> DnsResolver<MockTransport> {
    DnsResolver::google(transport, ReachabilityHandle::assume_reachable())
}

fn parse(url: &str) -> Url {
    Url::parse(url).unwrap()
}

#[tokio::test]
async fn resolve_substitutes_the_first_address() {
    let resolver = resolver(MockTransport::answering(ANSWER));

    let resolved = resolver
        .resolve(&parse("https://www.example.com/a?b=c"))
        .await
        .unwrap();

    assert_eq!(resolved.as_str(), "https://93.184.216.34/a?b=c");
}

#[tokio::test]
async fn doh_request_targets_the_resolve_endpoint() {
    let transport = MockTransport::answering(ANSWER);
    let resolver = resolver(transport.clone());

    resolver
        .resolve(&parse("https://www.example.com/"))
        .await
        .unwrap();

    let requests = transport.captured_requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert!(request.raw_url().starts_with("https://dns.google:443/resolve?"));

    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("name".into(), "www.example.com".into()),
            ("type".into(), "1".into()),
            ("cd".into(), "false".into()),
            ("ct".into(), String::new()),
            ("do".into(), "false".into()),
            ("edns_client_subnet".into(), "0.0.0.0/0".into()),
            ("random_padding".into(), String::new()),
        ]
    );
}

#[tokio::test]
async fn non_http_scheme_fails_without_a_network_call() {
    let transport = MockTransport::answering(ANSWER);
    let resolver = resolver(transport.clone());

    let result = resolver.resolve(&parse("ftp://example.com/file")).await;

    assert!(matches!(result, Err(DnsError::NotHttpScheme { .. })));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn answerless_response_fails_resolution() {
    let resolver = resolver(MockTransport::answering(r#"{"Status": 3}"#));

    let result = resolver.resolve(&parse("https://nxdomain.example/")).await;

    assert!(matches!(result, Err(DnsError::NoAddressRecords)));
}

#[tokio::test]
async fn query_failure_is_absorbed_by_the_fallback() {
    let transport = MockTransport::new(vec![Err(HttpError::Transport(Box::new(
        std::io::Error::other("connection reset"),
    )))]);
    let resolver = resolver(transport.clone());
    let original = parse("https://www.example.com/page");

    let url = resolver.resolve_or_original(&original).await;

    assert_eq!(url, original);
    // Exactly one attempt; the failed query is never retried
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn resolved_address_is_registered_for_trust_evaluation() {
    let hosts = Arc::new(ExpectedHosts::new());
    let resolver =
        resolver(MockTransport::answering(ANSWER)).with_expected_hosts(Arc::clone(&hosts));

    resolver
        .resolve(&parse("https://www.example.com/"))
        .await
        .unwrap();

    let ip: IpAddr = "93.184.216.34".parse().unwrap();
    assert_eq!(
        hosts.expected_for(ip).unwrap().as_str(),
        "www.example.com"
    );
}

#[tokio::test]
async fn future_face_matches_the_task_face() {
    let resolver = resolver(MockTransport::answering(ANSWER));

    let resolved = resolver
        .resolve_future(parse("https://www.example.com/a"))
        .await
        .unwrap();

    assert_eq!(resolved.as_str(), "https://93.184.216.34/a");
}

#[tokio::test]
async fn stream_face_emits_once_then_completes() {
    let resolver = resolver(MockTransport::answering(ANSWER));

    let mut stream = resolver.resolve_stream(parse("https://www.example.com/a"));

    let first = stream.next().await;
    assert!(matches!(first, Some(Ok(url)) if url.as_str() == "https://93.184.216.34/a"));
    assert!(stream.next().await.is_none());
}
