//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`text_area`]: Bordered entry box with cursor and placeholder
//! - [`status`]: Analyze/Clear controls and permission notice
//! - [`feedback`]: Alert and result lines
//! - [`footer`]: Backend note and keybinding hints

mod feedback;
mod footer;
mod header;
mod status;
mod text_area;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use feedback::{render_alert, render_result};
use footer::render_footer;
use header::render_header;
use status::render_status;
use text_area::render_text_area;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// ```text
/// [blank line]
/// [Title]
/// [Subtitle]
/// [Border]
/// [Text area - visible_rows + 2 lines]
/// [Controls]
/// [Alert]
/// [Result]
/// [blank line]
/// [Border]
/// [Backend note]
/// [Keybindings]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_text_area(current_row, &vm.text_area, theme, cols);
    current_row = render_status(current_row, &vm.status, theme, cols);
    current_row = render_alert(current_row, vm.alert.as_ref(), theme, cols);
    let content_end = render_result(current_row, vm.result.as_ref(), theme, cols);

    let footer_start = rows.saturating_sub(1).max(content_end + 2);
    render_border(footer_start - 1, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
