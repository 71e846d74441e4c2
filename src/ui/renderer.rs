//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from [`AppState`], then
//! hand it to the components.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::UIViewModel;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout for a `rows` x `cols` pane.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen.
///
/// # Example
///
/// ```rust
/// use zentiment::app::AppState;
/// use zentiment::client::Endpoint;
/// use zentiment::ui::{render, Theme};
///
/// let state = AppState::new(Endpoint::default(), Theme::default());
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let _span = tracing::trace_span!(
        "render",
        rows,
        cols,
        has_alert = vm.alert.is_some(),
        has_result = vm.result.is_some()
    )
    .entered();

    components::render_layout(vm, theme, cols, rows);
}
