//! Wire types for the `/predict` exchange.
//!
//! Request: `POST {base}/predict` with `Content-Type: application/json` and
//! body `{"text": "..."}`. Response bodies carry either `{"sentiment": "..."}`
//! or `{"error": "..."}`, and an `error` may accompany any HTTP status.

use crate::domain::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Context key under which the attempt id travels with the host request.
pub const ATTEMPT_CONTEXT_KEY: &str = "attempt";

/// JSON body sent to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictBody<'a> {
    pub text: &'a str,
}

/// JSON body returned by the endpoint.
///
/// Both fields are loosely typed. The classifier may return a non-string
/// label, and `error` is checked for truthiness rather than presence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub sentiment: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl PredictResponse {
    /// Returns the `error` message if the field is truthy.
    ///
    /// `null`, `false`, `0` and `""` do not count as an error.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Returns the `sentiment` label as text, if one is present.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self.sentiment.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// One outbound exchange, produced by an accepted `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictRequest {
    /// Attempt id used to match the reply to this request.
    pub attempt: u64,
    /// Fully resolved `/predict` URL.
    pub url: String,
    /// The user's input, untrimmed.
    pub text: String,
}

impl PredictRequest {
    /// Serializes the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ZentimentError::Protocol`] if serialization fails.
    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&PredictBody { text: &self.text })?)
    }

    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    /// Context map handed to the host and echoed back with the result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(ATTEMPT_CONTEXT_KEY.to_string(), self.attempt.to_string())])
    }
}

/// Reads the attempt id back out of an echoed context map.
#[must_use]
pub fn attempt_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(ATTEMPT_CONTEXT_KEY)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_keeps_input_untrimmed() {
        let request = PredictRequest {
            attempt: 1,
            url: "http://127.0.0.1:5000/predict".into(),
            text: "  I love playing Borderlands \n".into(),
        };
        let body: Value = serde_json::from_slice(&request.body().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "  I love playing Borderlands \n" }));
    }

    #[test]
    fn context_round_trips_attempt_id() {
        let request = PredictRequest { attempt: 42, url: String::new(), text: String::new() };
        assert_eq!(attempt_from_context(&request.context()), Some(42));
        assert_eq!(attempt_from_context(&BTreeMap::new()), None);
    }

    #[test]
    fn falsy_error_fields_are_not_errors() {
        for raw in [r#"{"error": null}"#, r#"{"error": ""}"#, r#"{"error": false}"#, r#"{"error": 0}"#] {
            let response: PredictResponse = serde_json::from_str(raw).unwrap();
            assert_eq!(response.error_message(), None, "{raw}");
        }
    }

    #[test]
    fn non_string_values_are_stringified() {
        let response: PredictResponse =
            serde_json::from_str(r#"{"sentiment": 4, "error": {"code": 7}}"#).unwrap();
        assert_eq!(response.label().as_deref(), Some("4"));
        assert_eq!(response.error_message().as_deref(), Some(r#"{"code":7}"#));
    }
}
