//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls the Zellij host. It returns a `Vec<Action>`
//! and the shim in `main.rs` executes them in order. This keeps the request
//! lifecycle testable without a host.
//!
//! # Example
//!
//! ```rust
//! use zentiment::app::{Action, RequestController};
//! use zentiment::client::Endpoint;
//!
//! let mut controller = RequestController::new(Endpoint::default());
//! let request = controller.analyze("what a game").unwrap();
//! let actions = vec![Action::SendPrediction(request)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::client::PredictRequest;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Performs one `/predict` exchange.
    ///
    /// The runtime must report the outcome back as
    /// [`Event::ExchangeCompleted`](crate::app::Event::ExchangeCompleted)
    /// carrying the same attempt id, even when the request cannot be sent.
    SendPrediction(PredictRequest),
}
