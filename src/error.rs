/// Decoded OAuth 2.0 error responses
use crate::code::ErrorCode;
use serde_json::{Map, Value};
use thiserror::Error;

/// An OAuth 2.0 error response (HTTP 400/401 with standard error JSON body).
/// Per RFC 6749 Section 5.2.
///
/// Holds the recognized error code together with the optional
/// `error_description` and `error_uri` fields, plus the full payload the
/// value was decoded from. The payload keeps keys the extraction ignores,
/// so nothing the server sent is lost.
///
/// Values are immutable once constructed and safe to share across threads.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("OAuth error: {code}")]
pub struct OAuthError {
    /// The recognized error code from the `error` field.
    pub code: ErrorCode,

    /// Human-readable detail from `error_description`, if the server sent one.
    pub description: Option<String>,

    /// Reference link from `error_uri`, if the server sent one.
    pub uri: Option<String>,

    /// The full decoded payload this value came from, retained verbatim.
    pub json: Option<Map<String, Value>>,
}

impl OAuthError {
    /// Construct an error value directly
    ///
    /// No validation is performed on `description` or `uri`; arbitrary
    /// strings are accepted.
    pub fn new(
        code: ErrorCode,
        description: Option<String>,
        uri: Option<String>,
        json: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            code,
            description,
            uri,
            json,
        }
    }

    /// Decode an error response from a parsed JSON object
    ///
    /// The `error` key must be present and hold one of the six wire
    /// identifiers, otherwise the whole decode fails. `error_description`
    /// and `error_uri` are taken when present and string-typed; a missing
    /// or wrongly-typed optional field never fails the decode. The entire
    /// input object is retained in the result's `json` field.
    pub fn decode_from_object(obj: &Map<String, Value>) -> Option<Self> {
        let code = obj.get("error").and_then(ErrorCode::decode)?;

        let description = obj
            .get("error_description")
            .and_then(Value::as_str)
            .map(String::from);
        let uri = obj
            .get("error_uri")
            .and_then(Value::as_str)
            .map(String::from);

        Some(Self::new(code, description, uri, Some(obj.clone())))
    }

    /// Decode an error response from raw bytes
    ///
    /// Malformed JSON and a non-object top level both normalize to `None`;
    /// the caller cannot tell them apart from a well-formed object without
    /// a recognizable `error` field, and no parser error escapes this call.
    pub fn decode_from_bytes(data: &[u8]) -> Option<Self> {
        match serde_json::from_slice::<Value>(data) {
            Ok(Value::Object(obj)) => Self::decode_from_object(&obj),
            _ => None,
        }
    }
}
