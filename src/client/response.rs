//! Response types and the decodable-payload contract.

use http::{HeaderMap, StatusCode};

use super::DecodeError;

/// An HTTP response as delivered by the transport.
///
/// The body is fully buffered into memory; suggestion and DoH payloads are
/// small by construction.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body (fully buffered).
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Contract every decodable response payload satisfies.
///
/// Each payload declares its own success-code set because different backends
/// signal success differently; the client checks the set before decoding and
/// maps mismatches to [`super::HttpError::UnexpectedStatus`].
pub trait ResponseBody: Sized + Send {
    /// HTTP status codes that carry a decodable body for this type.
    #[must_use]
    fn success_codes() -> &'static [u16] {
        &[200]
    }

    /// Decodes the response body into this type.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the bytes do not form a valid payload.
    fn decode(body: &[u8]) -> Result<Self, DecodeError>;
}
