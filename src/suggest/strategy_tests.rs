//! Tests for the provider strategies.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderMap, StatusCode};

use crate::client::{HttpError, HttpRequestInfo, HttpTransport, RawResponse, RequestError};
use crate::reachability::{NetworkReachabilityStatus, ReachabilityHandle};

use super::{AutocompleteStrategy, DuckDuckGoAutocomplete, GoogleAutocomplete};

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

const PAYLOAD: &str = r#"["rust", ["rust lang", "rust book"]]"#;

#[tokio::test]
async fn google_builds_the_documented_request() {
    let transport = MockTransport::answering(PAYLOAD);
    let strategy = GoogleAutocomplete::new(transport.clone(), ReachabilityHandle::assume_reachable());

    strategy.suggestions("rust").await.unwrap();

    let requests = transport.captured_requests();
    assert_eq!(requests.len(), 1);

    let request = &requests[0];
    assert!(
        request
            .raw_url()
            .starts_with("https://www.google.com:443/complete/search?")
    );

    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("q".into(), "rust".into()),
            ("client".into(), "firefox".into()),
        ]
    );

    assert_eq!(
        request.headers.get(CONTENT_TYPE).unwrap(),
        "application/x-suggestions+json"
    );
    assert_eq!(
        request.headers.get(ACCEPT).unwrap(),
        "application/x-suggestions+json"
    );
}

#[tokio::test]
async fn duckduckgo_builds_the_documented_request() {
    let transport = MockTransport::answering(PAYLOAD);
    let strategy =
        DuckDuckGoAutocomplete::new(transport.clone(), ReachabilityHandle::assume_reachable());

    strategy.suggestions("rust").await.unwrap();

    let requests = transport.captured_requests();
    let request = &requests[0];
    assert!(
        request
            .raw_url()
            .starts_with("https://ac.duckduckgo.com:443/ac?")
    );

    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![("q".into(), "rust".into()), ("type".into(), "list".into())]
    );
}

#[tokio::test]
async fn empty_query_fails_before_any_request_is_built() {
    let transport = MockTransport::answering(PAYLOAD);
    let strategy = GoogleAutocomplete::new(transport.clone(), ReachabilityHandle::assume_reachable());

    let result = strategy.suggestions("").await;

    assert!(matches!(
        result,
        Err(HttpError::Request(RequestError::EmptyQueryParam { .. }))
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn whitespace_query_fails_before_any_request_is_built() {
    let transport = MockTransport::answering(PAYLOAD);
    let strategy = GoogleAutocomplete::new(transport.clone(), ReachabilityHandle::assume_reachable());

    let result = strategy.suggestions("   ").await;

    assert!(matches!(
        result,
        Err(HttpError::Request(RequestError::SpacesInQueryParam { .. }))
    ));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn echoed_query_is_discarded() {
    let transport = MockTransport::answering(PAYLOAD);
    let strategy = GoogleAutocomplete::new(transport, ReachabilityHandle::assume_reachable());

    let suggestions = strategy.suggestions("rust").await.unwrap();

    assert_eq!(suggestions, vec!["rust lang", "rust book"]);
}

#[tokio::test]
async fn unreachable_network_short_circuits_the_call() {
    let transport = MockTransport::answering(PAYLOAD);
    let handle = ReachabilityHandle::fixed(NetworkReachabilityStatus::NotReachable);
    let strategy = GoogleAutocomplete::new(transport.clone(), handle);

    let result = strategy.suggestions("rust").await;

    assert!(matches!(result, Err(HttpError::NoConnectivity { .. })));
    assert_eq!(transport.calls(), 0);
}
