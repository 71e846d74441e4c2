//! Request lifecycle controller.
//!
//! [`RequestController`] owns the [`RequestState`] and is the only place it
//! changes. An accepted `analyze` call moves to `Loading` and hands back one
//! [`PredictRequest`]; the runtime performs it and later feeds the reply to
//! `complete`, which settles the attempt as `Succeeded` or `Failed`.
//!
//! # Re-entrancy
//!
//! `analyze` is rejected with [`AnalysisError::Busy`] while an exchange is in
//! flight, and every exchange carries an attempt id. A reply whose id does not
//! match the in-flight attempt is dropped. This covers replies that arrive
//! after `clear` abandoned their attempt.
//!
//! # Example
//!
//! ```rust
//! use zentiment::app::RequestController;
//! use zentiment::client::{Endpoint, ExchangeReply};
//! use zentiment::domain::{RequestState, SentimentLabel};
//!
//! let mut controller = RequestController::new(Endpoint::default());
//! let request = controller.analyze("I love playing Borderlands").unwrap();
//! assert!(controller.is_busy());
//!
//! let reply = ExchangeReply::response(200, r#"{"sentiment": "Positive"}"#);
//! controller.complete(request.attempt, &reply);
//! assert_eq!(controller.state(), &RequestState::Succeeded(SentimentLabel::new("Positive")));
//! assert!(!controller.is_busy());
//! ```

use crate::client::{Endpoint, ExchangeReply, PredictRequest};
use crate::domain::{AnalysisError, RequestState, SentimentLabel};
use chrono::{DateTime, Utc};

/// The exchange currently awaiting a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Attempt {
    id: u64,
    started_at: DateTime<Utc>,
}

/// Orchestrates one classification call at a time.
#[derive(Debug, Clone)]
pub struct RequestController {
    endpoint: Endpoint,
    state: RequestState,
    /// Validation failure surfaced while the state stays `Idle`.
    validation: Option<AnalysisError>,
    /// Busy indicator: asserted exactly while this is `Some`.
    in_flight: Option<Attempt>,
    last_attempt_id: u64,
    /// Round trip time of the last settled attempt.
    latency_ms: Option<i64>,
}

impl RequestController {
    #[must_use]
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            state: RequestState::Idle,
            validation: None,
            in_flight: None,
            last_attempt_id: 0,
            latency_ms: None,
        }
    }

    /// Starts an analysis attempt for `input`.
    ///
    /// On success the state is `Loading`, the busy indicator is asserted, and
    /// the returned request must be sent exactly once. The request carries the
    /// input untrimmed.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::Busy`] if an exchange is already in flight. Nothing
    ///   changes.
    /// - [`AnalysisError::Validation`] if `input` is blank. The state becomes
    ///   `Idle`, any previous result is cleared, and no request is produced.
    pub fn analyze(&mut self, input: &str) -> Result<PredictRequest, AnalysisError> {
        let _span = tracing::debug_span!(
            "analyze",
            input_len = input.len(),
            state = self.state.name()
        )
        .entered();

        if self.in_flight.is_some() {
            tracing::debug!(attempt = self.last_attempt_id, "analysis already in flight");
            return Err(AnalysisError::Busy);
        }

        self.state = RequestState::Validating;
        self.validation = None;
        self.latency_ms = None;

        if input.trim().is_empty() {
            tracing::debug!("rejecting blank input");
            self.state = RequestState::Idle;
            self.validation = Some(AnalysisError::Validation);
            return Err(AnalysisError::Validation);
        }

        self.last_attempt_id += 1;
        let attempt = Attempt { id: self.last_attempt_id, started_at: Utc::now() };
        self.in_flight = Some(attempt);
        self.state = RequestState::Loading;

        tracing::debug!(attempt = attempt.id, url = %self.endpoint.predict_url(), "exchange issued");

        Ok(PredictRequest {
            attempt: attempt.id,
            url: self.endpoint.predict_url(),
            text: input.to_string(),
        })
    }

    /// Settles the in-flight attempt with its reply.
    ///
    /// The busy indicator is de-asserted whatever the outcome. Returns `None`
    /// and leaves everything untouched when `attempt` is not the one in
    /// flight, e.g. a reply arriving after `clear`.
    pub fn complete(&mut self, attempt: u64, reply: &ExchangeReply) -> Option<&RequestState> {
        let _span = tracing::debug_span!("complete", attempt).entered();

        let Some(current) = self.in_flight.filter(|current| current.id == attempt) else {
            tracing::debug!(
                in_flight = ?self.in_flight.map(|a| a.id),
                "ignoring reply for an attempt that is not in flight"
            );
            return None;
        };
        self.in_flight = None;
        self.latency_ms = Some((Utc::now() - current.started_at).num_milliseconds());

        self.state = match reply.interpret() {
            Ok(label) => {
                tracing::debug!(label = %label, latency_ms = ?self.latency_ms, "analysis succeeded");
                RequestState::Succeeded(label)
            }
            Err(error) => {
                tracing::warn!(kind = error.kind(), error = %error, "analysis failed");
                RequestState::Failed(error)
            }
        };

        Some(&self.state)
    }

    /// Resets to `Idle` from any state.
    ///
    /// Drops the label, any alert, and abandons the in-flight attempt so its
    /// reply is ignored. Never issues a request.
    pub fn clear(&mut self) -> &RequestState {
        if let Some(abandoned) = self.in_flight.take() {
            tracing::debug!(attempt = abandoned.id, "abandoning in-flight attempt");
        }
        self.state = RequestState::Idle;
        self.validation = None;
        self.latency_ms = None;
        &self.state
    }

    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    /// True while an exchange is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The error to show in the alert region, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&AnalysisError> {
        match &self.state {
            RequestState::Failed(error) => Some(error),
            _ => self.validation.as_ref(),
        }
    }

    /// The label of a successful attempt.
    #[must_use]
    pub const fn label(&self) -> Option<&SentimentLabel> {
        match &self.state {
            RequestState::Succeeded(label) => Some(label),
            _ => None,
        }
    }

    #[must_use]
    pub const fn latency_ms(&self) -> Option<i64> {
        self.latency_ms
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RequestController {
        RequestController::new(Endpoint::default())
    }

    fn ok(label: &str) -> ExchangeReply {
        ExchangeReply::response(200, format!(r#"{{"sentiment": "{label}"}}"#))
    }

    #[test]
    fn blank_input_never_issues_a_request() {
        for input in ["", "   ", "\n\t  \n"] {
            let mut controller = controller();
            assert_eq!(controller.analyze(input), Err(AnalysisError::Validation));
            assert_eq!(controller.state(), &RequestState::Idle);
            assert!(!controller.is_busy());
            assert_eq!(
                controller.alert().map(ToString::to_string).as_deref(),
                Some("Please enter some text.")
            );
        }
    }

    #[test]
    fn blank_input_clears_previous_result() {
        let mut controller = controller();
        let request = controller.analyze("great").unwrap();
        controller.complete(request.attempt, &ok("Positive"));
        assert!(controller.label().is_some());

        assert!(controller.analyze(" ").is_err());
        assert_eq!(controller.label(), None);
        assert_eq!(controller.state(), &RequestState::Idle);
    }

    #[test]
    fn valid_input_issues_one_untrimmed_request() {
        let mut controller = controller();
        let request = controller.analyze("  I love playing Borderlands ").unwrap();

        assert_eq!(request.text, "  I love playing Borderlands ");
        assert_eq!(request.url, "http://127.0.0.1:5000/predict");
        assert_eq!(controller.state(), &RequestState::Loading);
        assert!(controller.is_busy());
        assert_eq!(controller.alert(), None);
    }

    #[test]
    fn successful_reply_yields_label_verbatim() {
        let mut controller = controller();
        let request = controller.analyze("I love playing Borderlands").unwrap();

        let state = controller.complete(request.attempt, &ok("Positive")).cloned();

        assert_eq!(state, Some(RequestState::Succeeded(SentimentLabel::new("Positive"))));
        assert!(!controller.is_busy());
        assert!(controller.latency_ms().is_some());
    }

    #[test]
    fn server_error_reply_fails_with_its_message() {
        let mut controller = controller();
        let request = controller.analyze("text").unwrap();
        let reply = ExchangeReply::response(500, r#"{"error": "model unavailable"}"#);

        controller.complete(request.attempt, &reply);

        assert_eq!(
            controller.state(),
            &RequestState::Failed(AnalysisError::ServerReported(Some("model unavailable".into())))
        );
        assert_eq!(controller.alert().unwrap().to_string(), "model unavailable");
        assert!(!controller.is_busy());
    }

    #[test]
    fn transport_failure_without_description_uses_fallback() {
        let mut controller = controller();
        let request = controller.analyze("text").unwrap();

        controller.complete(request.attempt, &ExchangeReply::TransportFailed { description: None });

        assert_eq!(controller.alert().unwrap().to_string(), "Could not connect to backend");
        assert!(!controller.is_busy());
    }

    #[test]
    fn busy_is_cleared_exactly_once() {
        let mut controller = controller();
        let request = controller.analyze("text").unwrap();

        assert!(controller.complete(request.attempt, &ok("Neutral")).is_some());
        assert!(controller.complete(request.attempt, &ok("Negative")).is_none());
        assert_eq!(controller.label().map(SentimentLabel::as_str), Some("Neutral"));
    }

    #[test]
    fn analyze_while_loading_is_rejected() {
        let mut controller = controller();
        let first = controller.analyze("first").unwrap();

        assert_eq!(controller.analyze("second"), Err(AnalysisError::Busy));
        assert_eq!(controller.state(), &RequestState::Loading);
        assert!(controller.is_busy());

        controller.complete(first.attempt, &ok("Positive"));
        assert_eq!(controller.label().map(SentimentLabel::as_str), Some("Positive"));
    }

    #[test]
    fn terminal_states_restart_on_analyze() {
        let mut controller = controller();
        let first = controller.analyze("first").unwrap();
        controller.complete(first.attempt, &ExchangeReply::response(500, "{}"));
        assert!(controller.state().is_terminal());

        let second = controller.analyze("second").unwrap();
        assert!(second.attempt > first.attempt);
        assert_eq!(controller.state(), &RequestState::Loading);
        assert_eq!(controller.alert(), None);
    }

    #[test]
    fn clear_is_idempotent_from_every_state() {
        let mut controller = controller();
        assert_eq!(controller.clear(), &RequestState::Idle);

        controller.analyze("loading").unwrap();
        assert_eq!(controller.clear(), &RequestState::Idle);
        assert!(!controller.is_busy());
        assert_eq!(controller.clear(), &RequestState::Idle);
        assert_eq!(controller.alert(), None);
        assert_eq!(controller.label(), None);
    }

    #[test]
    fn reply_after_clear_is_not_observed() {
        let mut controller = controller();
        let abandoned = controller.analyze("old").unwrap();
        controller.clear();
        let current = controller.analyze("new").unwrap();

        assert!(controller.complete(abandoned.attempt, &ok("Negative")).is_none());
        assert_eq!(controller.state(), &RequestState::Loading);

        controller.complete(current.attempt, &ok("Positive"));
        assert_eq!(controller.label().map(SentimentLabel::as_str), Some("Positive"));
    }
}
