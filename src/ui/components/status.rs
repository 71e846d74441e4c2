//! Controls row: the Analyze and Clear buttons plus any permission notice.

use crate::app::state::TEXT_AREA_MARGIN;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the controls on one row and returns the next row.
///
/// While an exchange is in flight both buttons are drawn dimmed, without
/// their background, so they read as unavailable.
pub fn render_status(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let analyze = format!(" {} ", status.analyze_label);
    let clear = " Clear ";
    let mut used = TEXT_AREA_MARGIN + analyze.chars().count() + 2 + clear.len();

    position_cursor(row, 1);
    print!("{}", " ".repeat(TEXT_AREA_MARGIN));
    print_button(&analyze, status.controls_enabled, theme);
    print!("  ");
    print_button(clear, status.controls_enabled, theme);

    if let Some(notice) = &status.notice {
        let remaining = cols.saturating_sub(used + 3);
        print!("   {}{}{}", Theme::fg(&theme.colors.notice_fg), fit(notice, remaining), Theme::reset());
        used += 3 + remaining;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}

fn print_button(label: &str, enabled: bool, theme: &Theme) {
    if enabled {
        print!(
            "{}{}{}{label}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.button_fg),
            Theme::bg(&theme.colors.button_bg),
            Theme::reset()
        );
    } else {
        print!("{}{}{label}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
}
