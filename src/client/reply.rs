//! Interpretation of exchange replies.
//!
//! The host reports every completed request as a status code plus a raw body.
//! When the request never reached the backend, the host answers with status
//! 400 and the transport error text as a plain-text body. Only that shape is
//! read as a transport failure; any other unparsable body is a server failure.

use super::protocol::PredictResponse;
use crate::domain::{AnalysisError, SentimentLabel};
use serde_json::Value;

/// Status the host uses to signal a request that never completed.
const HOST_FAILURE_STATUS: u16 = 400;

/// How an exchange ended, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeReply {
    /// The host received an HTTP response.
    Response {
        status: u16,
        body: Vec<u8>,
    },

    /// The exchange could not complete.
    TransportFailed {
        description: Option<String>,
    },
}

impl ExchangeReply {
    #[must_use]
    pub fn response(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::Response { status, body: body.into() }
    }

    /// Maps the reply to a label or the reason there is none.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::ServerReported`] for non-success statuses or a truthy
    ///   `error` field, carrying the `error` text when there is one.
    /// - [`AnalysisError::Transport`] when the exchange failed, or the host
    ///   answered 400 with a body that is not JSON.
    pub fn interpret(&self) -> Result<SentimentLabel, AnalysisError> {
        let (status, body) = match self {
            Self::TransportFailed { description } => {
                return Err(AnalysisError::transport(description.clone()));
            }
            Self::Response { status, body } => (*status, body),
        };

        let json: Value = match serde_json::from_slice(body) {
            Ok(json) => json,
            Err(e) if status == HOST_FAILURE_STATUS => {
                tracing::debug!(status, error = %e, "plain-text failure from host");
                return Err(AnalysisError::transport(plain_text_description(body)));
            }
            Err(e) => {
                tracing::debug!(status, error = %e, "response body is not JSON");
                return Err(AnalysisError::server(None));
            }
        };

        // JSON that is not an object carries neither field.
        let decoded: PredictResponse = serde_json::from_value(json).unwrap_or_default();

        let is_success = (200..300).contains(&status);
        if let Some(message) = decoded.error_message() {
            return Err(AnalysisError::server(Some(message)));
        }
        if !is_success {
            return Err(AnalysisError::server(None));
        }

        // A success response without a label is reported like any other
        // server-side failure.
        decoded
            .label()
            .map(SentimentLabel::new)
            .ok_or_else(|| AnalysisError::server(None))
    }
}

/// First non-empty line of a plain-text body, if it is valid UTF-8.
fn plain_text_description(body: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(body).ok()?;
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_label_is_kept_verbatim() {
        let reply = ExchangeReply::response(200, r#"{"sentiment": "Positive"}"#);
        assert_eq!(reply.interpret(), Ok(SentimentLabel::new("Positive")));

        let odd = ExchangeReply::response(201, r#"{"sentiment": "  meh "}"#);
        assert_eq!(odd.interpret().unwrap().as_str(), "  meh ");
    }

    #[test]
    fn error_field_wins_even_with_success_status() {
        let reply = ExchangeReply::response(200, r#"{"sentiment": "Positive", "error": "stale model"}"#);
        assert_eq!(reply.interpret(), Err(AnalysisError::ServerReported(Some("stale model".into()))));
    }

    #[test]
    fn server_error_uses_error_field() {
        let reply = ExchangeReply::response(500, r#"{"error": "model unavailable"}"#);
        assert_eq!(reply.interpret().unwrap_err().to_string(), "model unavailable");
    }

    #[test]
    fn non_success_without_error_field_is_generic() {
        let reply = ExchangeReply::response(404, "{}");
        assert_eq!(reply.interpret().unwrap_err().to_string(), "Request failed");
    }

    #[test]
    fn missing_label_on_success_is_generic_failure() {
        let reply = ExchangeReply::response(200, r#"{"sentiment": null}"#);
        assert_eq!(reply.interpret(), Err(AnalysisError::ServerReported(None)));
    }

    #[test]
    fn plain_text_body_is_transport_failure() {
        let reply = ExchangeReply::response(400, "error sending request: connection refused\nmore");
        assert_eq!(
            reply.interpret(),
            Err(AnalysisError::Transport(Some("error sending request: connection refused".into())))
        );
    }

    #[test]
    fn html_error_page_is_generic_server_failure() {
        let reply = ExchangeReply::response(502, "<!DOCTYPE html>\n<html><body>Bad Gateway</body></html>");
        assert_eq!(reply.interpret(), Err(AnalysisError::ServerReported(None)));
        assert_eq!(reply.interpret().unwrap_err().to_string(), "Request failed");
    }

    #[test]
    fn bare_json_string_is_not_a_label() {
        let reply = ExchangeReply::response(200, r#""Positive""#);
        assert_eq!(reply.interpret(), Err(AnalysisError::ServerReported(None)));

        let listed = ExchangeReply::response(500, r#"["model unavailable"]"#);
        assert_eq!(listed.interpret(), Err(AnalysisError::ServerReported(None)));
    }

    #[test]
    fn empty_body_falls_back_to_connect_message() {
        let reply = ExchangeReply::response(400, Vec::new());
        assert_eq!(reply.interpret().unwrap_err().to_string(), "Could not connect to backend");

        let failed = ExchangeReply::TransportFailed { description: None };
        assert_eq!(failed.interpret().unwrap_err().to_string(), "Could not connect to backend");
    }
}
