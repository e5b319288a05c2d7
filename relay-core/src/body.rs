//! JSON body handling for backend replies.
//!
//! Success bodies must parse as JSON. Error bodies are parsed best-effort:
//! anything that does not parse is treated as an empty object, and the
//! caller-facing message falls back to [`FALLBACK_ERROR_MESSAGE`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::CoreError;

/// Message used when the backend's error body carries no usable `message`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch analysis result";

/// Message returned when the request carries no credential.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Authorization token required";

/// Message returned for any transport or unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// The `{ "error": ... }` shape of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Creates an `ErrorBody` from any string-like message.
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Parse a body as JSON.
///
/// # Errors
/// Returns [`CoreError::MalformedJson`] if the bytes are not a JSON document.
pub fn try_parse_json(body: &[u8]) -> Result<Value, CoreError> {
    Ok(serde_json::from_slice(body)?)
}

/// Parse a body as JSON, substituting an empty object on failure.
#[must_use]
pub fn parse_or_empty(body: &[u8]) -> Value {
    try_parse_json(body).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Extract the caller-facing message from a backend error body.
///
/// Uses the top-level `message` member when it is a non-empty string.
#[must_use]
pub fn backend_error_message(body: &[u8]) -> String {
    match parse_or_empty(body).get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => FALLBACK_ERROR_MESSAGE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn message_is_taken_from_error_body() {
        assert_eq!(backend_error_message(br#"{"message":"job not found"}"#), "job not found");
    }

    #[test]
    fn unusable_error_bodies_fall_back() {
        let cases: [&[u8]; 8] = [
            b"",
            b"<html>Bad Gateway</html>",
            b"{}",
            br#"{"message":""}"#,
            br#"{"message":null}"#,
            br#"{"message":42}"#,
            br#"{"detail":"nope"}"#,
            br#"["message"]"#,
        ];
        for body in cases {
            assert_eq!(
                backend_error_message(body),
                FALLBACK_ERROR_MESSAGE,
                "body {:?} should fall back",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn parse_or_empty_substitutes_empty_object() {
        assert_eq!(parse_or_empty(b"not json"), serde_json::json!({}));
        assert_eq!(parse_or_empty(br#"{"a":1}"#), serde_json::json!({"a": 1}));
    }

    #[test]
    fn try_parse_json_reports_malformed_body() {
        match try_parse_json(b"{\"status\":") {
            Err(CoreError::MalformedJson(_)) => {}
            other => panic!("expected MalformedJson, got {other:?}"),
        }
    }

    #[test]
    fn try_parse_json_preserves_key_order() {
        let value = match try_parse_json(br#"{"zeta":1,"alpha":{"y":2,"b":3}}"#) {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {e}"),
        };
        let reencoded = match serde_json::to_string(&value) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(reencoded, r#"{"zeta":1,"alpha":{"y":2,"b":3}}"#);
    }

    #[test]
    fn error_body_serializes_single_field() {
        let json = match serde_json::to_string(&ErrorBody::new(MISSING_CREDENTIAL_MESSAGE)) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"error":"Authorization token required"}"#);
    }

    proptest! {
        #[test]
        fn any_non_empty_message_is_relayed(message in "\\PC{1,64}") {
            let body = serde_json::json!({ "message": message.clone(), "code": 7 }).to_string();
            prop_assert_eq!(backend_error_message(body.as_bytes()), message);
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let message = backend_error_message(&bytes);
            prop_assert!(!message.is_empty());
        }
    }
}
