//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! a session: key presses, permission answers, and exchange replies. It
//! mutates [`AppState`] and returns whether to re-render plus the actions the
//! runtime must execute.
//!
//! # Example
//!
//! ```rust
//! use zentiment::app::{handle_event, Action, AppState, Event, WebAccess};
//! use zentiment::client::Endpoint;
//! use zentiment::ui::Theme;
//!
//! let mut state = AppState::new(Endpoint::default(), Theme::default());
//! state.web_access = WebAccess::Granted;
//! for c in "great".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Analyze)?;
//! assert!(matches!(actions.as_slice(), [Action::SendPrediction(_)]));
//! # Ok::<(), zentiment::ZentimentError>(())
//! ```

use crate::app::{Action, AppState, WebAccess};
use crate::client::ExchangeReply;
use crate::domain::error::Result;
use crate::domain::AnalysisError;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Inserts a character at the cursor.
    Char(char),
    /// Inserts a line break at the cursor.
    Newline,
    /// Removes the character before the cursor.
    Backspace,
    /// Removes the character under the cursor.
    Delete,
    CursorLeft,
    CursorRight,
    /// Moves to the start of the current line.
    CursorHome,
    /// Moves to the end of the current line.
    CursorEnd,

    /// Starts an analysis of the current text.
    Analyze,
    /// Clears the text and the result. Ignored while an exchange is in flight.
    Clear,
    /// Hides the plugin pane.
    CloseFocus,

    /// The host answered the permission request.
    PermissionsResult {
        /// Whether web access was granted.
        granted: bool,
    },

    /// An exchange finished.
    ExchangeCompleted {
        /// Attempt id echoed back from the request context.
        attempt: u64,
        /// What the host observed.
        reply: ExchangeReply,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// Reserved for failures that should stop event processing; analysis
/// failures are state, not errors, and never surface here.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.input.insert(*c);
            Ok((true, vec![]))
        }
        Event::Newline => {
            state.input.insert('\n');
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.input.backspace(), vec![])),
        Event::Delete => Ok((state.input.delete(), vec![])),
        Event::CursorLeft => Ok((state.input.move_left(), vec![])),
        Event::CursorRight => Ok((state.input.move_right(), vec![])),
        Event::CursorHome => Ok((state.input.move_home(), vec![])),
        Event::CursorEnd => Ok((state.input.move_end(), vec![])),
        Event::Analyze => Ok(analyze(state)),
        Event::Clear => {
            if state.controller.is_busy() {
                tracing::debug!("clear ignored while analysis is in flight");
                return Ok((false, vec![]));
            }
            state.clear();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            state.web_access = if *granted { WebAccess::Granted } else { WebAccess::Denied };
            tracing::debug!(web_access = ?state.web_access, "permission result recorded");
            Ok((true, vec![]))
        }
        Event::ExchangeCompleted { attempt, reply } => {
            let observed = state.controller.complete(*attempt, reply).is_some();
            Ok((observed, vec![]))
        }
    }
}

/// Starts an attempt and turns it into at most one exchange.
///
/// Without web access the attempt is settled right away as a transport
/// failure, so the busy indicator never sticks.
fn analyze(state: &mut AppState) -> (bool, Vec<Action>) {
    let request = match state.controller.analyze(state.input.text()) {
        Ok(request) => request,
        Err(AnalysisError::Busy) => return (false, vec![]),
        Err(error) => {
            tracing::debug!(kind = error.kind(), "analysis rejected");
            return (true, vec![]);
        }
    };

    if let Some(reason) = state.web_access.blocked_reason() {
        tracing::warn!(attempt = request.attempt, reason, "cannot reach backend");
        let reply = ExchangeReply::TransportFailed { description: Some(reason.to_string()) };
        state.controller.complete(request.attempt, &reply);
        return (true, vec![]);
    }

    (true, vec![Action::SendPrediction(request)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Endpoint;
    use crate::domain::{RequestState, SentimentLabel};
    use crate::ui::Theme;

    fn granted_state() -> AppState {
        let mut state = AppState::new(Endpoint::default(), Theme::default());
        state.web_access = WebAccess::Granted;
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    fn sent_requests(actions: &[Action]) -> Vec<&crate::client::PredictRequest> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::SendPrediction(request) => Some(request),
                Action::CloseFocus => None,
            })
            .collect()
    }

    #[test]
    fn blank_analyze_renders_alert_without_exchange() {
        let mut state = granted_state();
        type_text(&mut state, "   ");

        let (render, actions) = handle_event(&mut state, &Event::Analyze).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.controller.state(), &RequestState::Idle);
        assert_eq!(state.controller.alert(), Some(&AnalysisError::Validation));
    }

    #[test]
    fn analyze_emits_exactly_one_exchange() {
        let mut state = granted_state();
        type_text(&mut state, "I love playing Borderlands");

        let (_, actions) = handle_event(&mut state, &Event::Analyze).unwrap();
        let requests = sent_requests(&actions);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].text, "I love playing Borderlands");

        let (render, actions) = handle_event(&mut state, &Event::Analyze).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn completion_settles_state() {
        let mut state = granted_state();
        type_text(&mut state, "good");
        let (_, actions) = handle_event(&mut state, &Event::Analyze).unwrap();
        let attempt = sent_requests(&actions)[0].attempt;

        let event = Event::ExchangeCompleted {
            attempt,
            reply: ExchangeReply::response(200, r#"{"sentiment": "Positive"}"#),
        };
        let (render, _) = handle_event(&mut state, &event).unwrap();

        assert!(render);
        assert_eq!(
            state.controller.state(),
            &RequestState::Succeeded(SentimentLabel::new("Positive"))
        );
        let (render_again, _) = handle_event(&mut state, &event).unwrap();
        assert!(!render_again);
    }

    #[test]
    fn clear_is_ignored_while_busy() {
        let mut state = granted_state();
        type_text(&mut state, "text");
        handle_event(&mut state, &Event::Analyze).unwrap();

        let (render, _) = handle_event(&mut state, &Event::Clear).unwrap();

        assert!(!render);
        assert_eq!(state.input.text(), "text");
        assert!(state.controller.is_busy());
    }

    #[test]
    fn clear_resets_input_and_state() {
        let mut state = granted_state();
        type_text(&mut state, "text");
        handle_event(&mut state, &Event::Clear).unwrap();
        handle_event(&mut state, &Event::Clear).unwrap();

        assert_eq!(state.input.text(), "");
        assert_eq!(state.controller.state(), &RequestState::Idle);
    }

    #[test]
    fn missing_permission_fails_without_exchange() {
        let mut state = AppState::new(Endpoint::default(), Theme::default());
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        type_text(&mut state, "text");

        let (render, actions) = handle_event(&mut state, &Event::Analyze).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.controller.is_busy());
        assert_eq!(
            state.controller.alert().map(ToString::to_string).as_deref(),
            Some("Web access permission was not granted")
        );
    }

    #[test]
    fn editing_keys_move_and_delete() {
        let mut state = granted_state();
        type_text(&mut state, "ab");
        handle_event(&mut state, &Event::CursorHome).unwrap();
        handle_event(&mut state, &Event::Delete).unwrap();
        handle_event(&mut state, &Event::CursorEnd).unwrap();
        handle_event(&mut state, &Event::Newline).unwrap();
        let (render, _) = handle_event(&mut state, &Event::CursorRight).unwrap();

        assert!(!render);
        assert_eq!(state.input.text(), "b\n");
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = granted_state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
