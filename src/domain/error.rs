//! Error types for the Zentiment plugin.
//!
//! Two error types live here:
//!
//! - [`ZentimentError`]: plugin-level failures (configuration, themes, wire
//!   encoding) with the [`Result`] alias used across the crate.
//! - [`AnalysisError`]: the outcome taxonomy of a single analysis attempt. Its
//!   `Display` output is exactly what the user sees in the alert region.

use thiserror::Error;

/// Fallback message when the endpoint signals failure without an `error` field.
pub const REQUEST_FAILED: &str = "Request failed";

/// Fallback message when the exchange fails without any description.
pub const COULD_NOT_CONNECT: &str = "Could not connect to backend";

/// Message surfaced when the trimmed input is empty.
pub const EMPTY_INPUT: &str = "Please enter some text.";

/// The main error type for Zentiment plugin operations.
///
/// # Examples
///
/// ```
/// use zentiment::domain::ZentimentError;
///
/// fn validate_base() -> Result<(), ZentimentError> {
///     Err(ZentimentError::Config("api_base must be an http(s) URL".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ZentimentError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request or response payload could not be encoded or decoded.
    #[error("Protocol error: {0}")]
    Protocol(#[from] serde_json::Error),
}

/// A specialized `Result` type for Zentiment operations.
pub type Result<T> = std::result::Result<T, ZentimentError>;

/// Why an analysis attempt did not produce a label.
///
/// None of these are retried. Every variant except [`AnalysisError::Busy`] is
/// shown to the user; `Busy` is an interface-level rejection that leaves the
/// in-flight attempt untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The trimmed input was empty. Never reaches the network.
    #[error("{}", EMPTY_INPUT)]
    Validation,

    /// The exchange completed but the endpoint signaled failure, either with a
    /// non-success status or an explicit `error` field.
    #[error("{}", or_fallback(.0, REQUEST_FAILED))]
    ServerReported(Option<String>),

    /// The exchange itself could not complete (connectivity, unreadable body).
    #[error("{}", or_fallback(.0, COULD_NOT_CONNECT))]
    Transport(Option<String>),

    /// Another exchange is already in flight.
    #[error("An analysis is already in progress")]
    Busy,
}

fn or_fallback<'a>(message: &'a Option<String>, fallback: &'a str) -> &'a str {
    message.as_deref().unwrap_or(fallback)
}

impl AnalysisError {
    /// Builds a server-reported error, treating an empty message as absent.
    #[must_use]
    pub fn server(message: Option<String>) -> Self {
        Self::ServerReported(message.filter(|m| !m.trim().is_empty()))
    }

    /// Builds a transport error, treating an empty description as absent.
    #[must_use]
    pub fn transport(description: Option<String>) -> Self {
        Self::Transport(description.filter(|d| !d.trim().is_empty()))
    }

    /// Short machine-friendly kind name, used as a tracing field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::ServerReported(_) => "server_reported",
            Self::Transport(_) => "transport",
            Self::Busy => "busy",
        }
    }
}
