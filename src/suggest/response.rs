//! The shared suggestion payload shape.

use serde_json::Value;

use crate::client::{DecodeError, ResponseBody};

/// An un-keyed two-element suggestion payload:
/// `[echoed-query, [suggestion, ...]]`.
///
/// Both Google and DuckDuckGo use this shape. Providers may append further
/// elements (descriptions, metadata); only the first two are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionsResponse {
    /// The query echoed back by the provider.
    pub query: String,
    /// Ordered suggestion strings.
    pub suggestions: Vec<String>,
}

impl ResponseBody for SuggestionsResponse {
    fn decode(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body)?;

        let elements = value.as_array().ok_or_else(|| DecodeError::Shape {
            reason: "expected a top-level array".to_string(),
        })?;

        let query = elements
            .first()
            .and_then(Value::as_str)
            .ok_or_else(|| DecodeError::Shape {
                reason: "expected an echoed query string first".to_string(),
            })?
            .to_string();

        let suggestions = elements
            .get(1)
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::Shape {
                reason: "expected a suggestion array second".to_string(),
            })?
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(ToString::to_string)
                    .ok_or_else(|| DecodeError::Shape {
                        reason: "expected suggestion entries to be strings".to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { query, suggestions })
    }
}
