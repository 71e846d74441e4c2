//! Header component renderer: centered title over a dimmed subtitle.

use crate::ui::helpers::{centered_padding, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title and subtitle starting at `row`.
///
/// Both lines are centered and padded to the full width. Returns the next
/// available row (`row + 2`).
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count().min(cols);
    let padding = centered_padding(title_len, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&header.title, cols - padding));
    print!("{}", Theme::reset());

    let subtitle_len = header.subtitle.chars().count().min(cols);
    let padding = centered_padding(subtitle_len, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&header.subtitle, cols - padding));
    print!("{}", Theme::reset());

    row + 2
}
