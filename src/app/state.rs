//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for one plugin session: the
//! text being composed, the request controller, the theme, and whether web
//! access was granted. View models are computed on demand from it.
//!
//! # Example
//!
//! ```rust
//! use zentiment::app::AppState;
//! use zentiment::client::Endpoint;
//! use zentiment::ui::Theme;
//!
//! let state = AppState::new(Endpoint::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.result.is_none());
//! ```

use super::access::WebAccess;
use super::controller::RequestController;
use super::input::InputBuffer;
use crate::client::{Endpoint, API_BASE_ENV};
use crate::ui::helpers::wrap_input;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AlertInfo, FooterInfo, HeaderInfo, ResultInfo, StatusInfo, TextAreaInfo, UIViewModel,
};

/// Example shown in the empty text area.
const PLACEHOLDER: &str = "e.g., I love playing Borderlands, it’s amazing!";

/// Horizontal margin on each side of the text area.
pub const TEXT_AREA_MARGIN: usize = 2;

/// Rows used by everything except the text lines.
///
/// blank, title, subtitle, border, box top, box bottom, status, alert,
/// result, blank, border, backend note, keybindings.
const CHROME_ROWS: usize = 13;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Text the user is composing.
    pub input: InputBuffer,

    /// Owner of the request lifecycle.
    pub controller: RequestController,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Host permission for `web_request`.
    pub web_access: WebAccess,
}

impl AppState {
    #[must_use]
    pub fn new(endpoint: Endpoint, theme: Theme) -> Self {
        Self {
            input: InputBuffer::new(),
            controller: RequestController::new(endpoint),
            theme,
            web_access: WebAccess::Pending,
        }
    }

    /// Resets the text and the request state.
    pub fn clear(&mut self) {
        self.input.clear();
        self.controller.clear();
    }

    /// Computes a renderable view model for the given terminal size.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: "Sentiment Analysis".to_string(),
                subtitle: "Type text and get a predicted sentiment.".to_string(),
            },
            text_area: self.compute_text_area(rows, cols),
            status: self.compute_status(),
            alert: self.controller.alert().map(|error| AlertInfo {
                message: error.to_string(),
            }),
            result: self.controller.label().map(|label| ResultInfo {
                label: label.to_string(),
                category: label.category(),
                latency_ms: self.controller.latency_ms(),
            }),
            footer: self.compute_footer(),
        }
    }

    /// Wraps the input to the box width and scrolls so the cursor stays visible.
    fn compute_text_area(&self, rows: usize, cols: usize) -> TextAreaInfo {
        let visible_rows = Self::calculate_text_rows(rows);
        let width = Self::calculate_text_width(cols);

        if self.input.text().is_empty() {
            return TextAreaInfo {
                lines: vec![String::new()],
                cursor: Some((0, 0)),
                placeholder: Some(PLACEHOLDER.to_string()),
                visible_rows,
            };
        }

        let (lines, (cursor_row, cursor_col)) =
            wrap_input(self.input.text(), self.input.cursor(), width);

        let first_visible = (cursor_row + 1).saturating_sub(visible_rows);
        let last_visible = (first_visible + visible_rows).min(lines.len());

        tracing::trace!(
            total_lines = lines.len(),
            first_visible,
            cursor_row,
            "text area windowed"
        );

        TextAreaInfo {
            lines: lines[first_visible..last_visible].to_vec(),
            cursor: Some((cursor_row - first_visible, cursor_col)),
            placeholder: None,
            visible_rows,
        }
    }

    fn compute_status(&self) -> StatusInfo {
        let busy = self.controller.is_busy();
        let analyze_label = if busy { "Analyzing…" } else { "Analyze Sentiment" };
        StatusInfo {
            analyze_label: analyze_label.to_string(),
            controls_enabled: !busy,
            notice: self.web_access.blocked_reason().map(String::from),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.controller.is_busy() {
            "Waiting for the backend…  Esc: hide".to_string()
        } else {
            "Enter: analyze  Alt+Enter: newline  Ctrl+l: clear  Esc: hide".to_string()
        };

        FooterInfo {
            keybindings,
            backend: format!(
                "Backend expected at {}. Set api_base or {API_BASE_ENV} to change.",
                self.controller.endpoint().base()
            ),
        }
    }

    const fn calculate_text_rows(total_rows: usize) -> usize {
        let rows = total_rows.saturating_sub(CHROME_ROWS);
        if rows == 0 {
            1
        } else {
            rows
        }
    }

    /// Inner width: margins, two border columns and one space of padding each side.
    const fn calculate_text_width(cols: usize) -> usize {
        let width = cols.saturating_sub(TEXT_AREA_MARGIN * 2 + 4);
        if width == 0 {
            1
        } else {
            width
        }
    }
}
