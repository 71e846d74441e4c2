//! Footer component renderer.

use crate::ui::helpers::{centered_padding, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the backend note and the keybinding hints on two rows.
///
/// Both are centered and dimmed. Text wider than the terminal is truncated so
/// the layout never wraps.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    for (offset, text) in [&footer.backend, &footer.keybindings].into_iter().enumerate() {
        let text_len = text.chars().count().min(cols);
        let padding = centered_padding(text_len, cols);

        position_cursor(row + offset, 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", " ".repeat(padding));
        print!("{}", fit(text, cols - padding));
        print!("{}", Theme::reset());
    }
    row + 2
}
