//! Application layer: the request lifecycle and the event/action model.
//!
//! # Modules
//!
//! - [`input`]: Editable text buffer ([`InputBuffer`])
//! - [`controller`]: Request lifecycle state machine ([`RequestController`])
//! - [`state`]: Session state container and view model computation
//! - [`handler`]: Event processing ([`handle_event`])
//! - [`actions`]: Side effects returned to the runtime
//! - [`access`]: Web access permission state
//!
//! # Flow
//!
//! ```text
//! Event ──▶ handle_event ──▶ AppState (InputBuffer, RequestController)
//!                 │
//!                 └──▶ Vec<Action> ──▶ main.rs executes (web_request, hide_self)
//! ```

pub mod access;
pub mod actions;
pub mod controller;
pub mod handler;
pub mod input;
pub mod state;

pub use access::WebAccess;
pub use actions::Action;
pub use controller::RequestController;
pub use handler::{handle_event, Event};
pub use input::InputBuffer;
pub use state::AppState;
