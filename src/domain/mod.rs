//! Domain layer for the Zentiment plugin.
//!
//! Core types with no dependency on Zellij APIs or the wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types, the attempt error taxonomy, and result aliases
//! - [`state`]: The request lifecycle state
//! - [`sentiment`]: Sentiment labels and their display categories
//!
//! # Examples
//!
//! ```
//! use zentiment::domain::{RequestState, SentimentLabel};
//!
//! let state = RequestState::Succeeded(SentimentLabel::new("Positive"));
//! assert!(state.is_terminal());
//! ```

pub mod error;
pub mod sentiment;
pub mod state;

pub use error::{AnalysisError, Result, ZentimentError};
pub use sentiment::{SentimentCategory, SentimentLabel};
pub use state::RequestState;
