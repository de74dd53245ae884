//! Google DNS-over-HTTPS JSON wire model.

use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

use crate::client::{
    DecodeError, Endpoint, QueryItem, RequestError, ResponseBody, ServerDescription,
};
use crate::host::Host;

/// Host of Google's DNS-over-HTTPS JSON endpoint.
pub const GOOGLE_DNS_HOST: &str = "dns.google";

/// Numeric record type for A records.
const RECORD_TYPE_A: u16 = 1;

/// Returns the default DoH server descriptor (Google's JSON endpoint).
#[must_use]
pub fn google_dns_server() -> ServerDescription {
    ServerDescription::https(GOOGLE_DNS_HOST).expect("well-known DoH host is a valid domain")
}

/// Builds the `/resolve` endpoint for an A-record query on `host`.
///
/// The client subnet is masked to `0.0.0.0/0` so the resolver never learns
/// the caller's network, and the padding field is present but empty.
///
/// # Errors
///
/// Returns [`RequestError`] if the query name fails required-parameter
/// validation.
pub fn resolve_endpoint(host: &Host) -> Result<Endpoint<DohResponse>, RequestError> {
    Ok(Endpoint::get("resolve").with_query(vec![
        QueryItem::required("name", host.as_str())?,
        QueryItem::new("type", RECORD_TYPE_A.to_string()),
        QueryItem::new("cd", "false"),
        QueryItem::new("ct", ""),
        QueryItem::new("do", "false"),
        QueryItem::new("edns_client_subnet", "0.0.0.0/0"),
        QueryItem::new("random_padding", ""),
    ]))
}

/// A single answer record in a DoH response.
#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    /// Owner name the record answers for.
    pub name: String,
    /// Numeric record type (1 = A).
    #[serde(rename = "type")]
    pub record_type: u16,
    /// Time to live in seconds.
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    /// Record payload; the address string for A records.
    pub data: String,
}

/// Google DoH JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR).
    #[serde(rename = "Status")]
    pub status: u32,
    /// Answer section; absent when the name does not resolve.
    #[serde(rename = "Answer", default)]
    pub answers: Vec<DohAnswer>,
}

impl DohResponse {
    /// Returns the resolved address under the documented selection policy:
    /// the first answer with `type == 1` whose data parses as an IPv4
    /// address. Answers of other types (CNAME chains, AAAA) are skipped.
    #[must_use]
    pub fn first_address(&self) -> Option<IpAddr> {
        self.answers
            .iter()
            .filter(|answer| answer.record_type == RECORD_TYPE_A)
            .find_map(|answer| answer.data.parse::<Ipv4Addr>().ok())
            .map(IpAddr::V4)
    }
}

impl ResponseBody for DohResponse {
    fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(DecodeError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Status": 0,
        "TC": false,
        "Question": [{"name": "dns.google.", "type": 1}],
        "Answer": [
            {"name": "dns.google.", "type": 5, "TTL": 300, "data": "redirect.dns.google."},
            {"name": "redirect.dns.google.", "type": 1, "TTL": 788, "data": "8.8.8.8"},
            {"name": "redirect.dns.google.", "type": 1, "TTL": 788, "data": "8.8.4.4"}
        ]
    }"#;

    #[test]
    fn decodes_google_payload() {
        let response = DohResponse::decode(SAMPLE.as_bytes()).unwrap();

        assert_eq!(response.status, 0);
        assert_eq!(response.answers.len(), 3);
    }

    #[test]
    fn first_address_skips_non_a_records() {
        let response = DohResponse::decode(SAMPLE.as_bytes()).unwrap();

        assert_eq!(
            response.first_address(),
            Some("8.8.8.8".parse::<IpAddr>().unwrap())
        );
    }

    #[test]
    fn no_answers_yields_no_address() {
        let response = DohResponse::decode(br#"{"Status": 3}"#).unwrap();

        assert_eq!(response.first_address(), None);
    }

    #[test]
    fn malformed_address_data_is_skipped() {
        let body = r#"{
            "Status": 0,
            "Answer": [
                {"name": "x.", "type": 1, "TTL": 1, "data": "not-an-ip"},
                {"name": "x.", "type": 1, "TTL": 1, "data": "1.1.1.1"}
            ]
        }"#;
        let response = DohResponse::decode(body.as_bytes()).unwrap();

        assert_eq!(
            response.first_address(),
            Some("1.1.1.1".parse::<IpAddr>().unwrap())
        );
    }

    #[test]
    fn default_server_is_google() {
        assert_eq!(google_dns_server().host().as_str(), GOOGLE_DNS_HOST);
    }
}
