//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: wrapped lines, labels,
//! and flags. No rendering decision needs to look back at `AppState`.

use crate::domain::SentimentCategory;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title block.
    pub header: HeaderInfo,

    /// The text entry box.
    pub text_area: TextAreaInfo,

    /// Analyze/Clear controls and any permission notice.
    pub status: StatusInfo,

    /// Validation or failure message, if any.
    pub alert: Option<AlertInfo>,

    /// Predicted label, present only after a successful attempt.
    pub result: Option<ResultInfo>,

    /// Key hints and backend note.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// The visible window of the text area.
#[derive(Debug, Clone)]
pub struct TextAreaInfo {
    /// Wrapped lines inside the visible window.
    pub lines: Vec<String>,

    /// Cursor as `(row, column)` relative to `lines`.
    pub cursor: Option<(usize, usize)>,

    /// Dimmed hint shown when the buffer is empty.
    pub placeholder: Option<String>,

    /// Number of text rows the box occupies, including blank ones.
    pub visible_rows: usize,
}

/// Controls row.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// "Analyze Sentiment" or "Analyzing…".
    pub analyze_label: String,

    /// False while an exchange is in flight; both controls render dimmed.
    pub controls_enabled: bool,

    /// Why analysis cannot reach the network, if it cannot.
    pub notice: Option<String>,
}

/// Alert line.
#[derive(Debug, Clone)]
pub struct AlertInfo {
    pub message: String,
}

/// Result line.
#[derive(Debug, Clone)]
pub struct ResultInfo {
    /// The label exactly as returned.
    pub label: String,

    /// Category selecting the badge color.
    pub category: SentimentCategory,

    /// Round trip time of the attempt.
    pub latency_ms: Option<i64>,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// Where requests are sent and how to change it.
    pub backend: String,
}
