//! Request lifecycle state.
//!
//! Exactly one [`RequestState`] value is active at a time. Transitions are
//! owned by [`crate::app::RequestController`]; nothing else assigns it.
//!
//! ```text
//! Idle ──analyze(valid)──▶ Loading ──reply ok──▶ Succeeded(label)
//!   ▲                        │
//!   │                        └──reply error / transport──▶ Failed(message)
//!   └──────────── clear (from any state) ◀───────────────────────┘
//! ```

use super::error::AnalysisError;
use super::sentiment::SentimentLabel;

/// The state of the current analysis attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing in flight and nothing to show.
    #[default]
    Idle,

    /// Input is being checked. Only observable inside `analyze`.
    Validating,

    /// One exchange is in flight.
    Loading,

    /// The endpoint returned a label.
    Succeeded(SentimentLabel),

    /// The attempt failed.
    Failed(AnalysisError),
}

impl RequestState {
    /// `Succeeded` and `Failed` end an attempt, not the session.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    /// Short name for tracing fields.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Loading => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
