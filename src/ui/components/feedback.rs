//! Alert and result lines shown under the controls.

use crate::app::state::TEXT_AREA_MARGIN;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{AlertInfo, ResultInfo};

/// Renders the alert row, blank when there is nothing to report.
pub fn render_alert(row: usize, alert: Option<&AlertInfo>, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(TEXT_AREA_MARGIN);

    position_cursor(row, 1);
    print!("{}", " ".repeat(TEXT_AREA_MARGIN));
    match alert {
        Some(alert) => print!(
            "{}{}{}",
            Theme::fg(&theme.colors.alert_fg),
            fit(&format!("⚠ {}", alert.message), width),
            Theme::reset()
        ),
        None => print!("{}", " ".repeat(width)),
    }
    row + 1
}

/// Renders "Predicted Sentiment: <badge>" with the badge colored by category.
///
/// The label is printed exactly as the backend returned it.
pub fn render_result(row: usize, result: Option<&ResultInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(result) = result else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let prefix = "Predicted Sentiment: ";
    let badge = format!(" {} ", result.label);
    let latency = result
        .latency_ms
        .map(|ms| format!("  ({ms} ms)"))
        .unwrap_or_default();

    print!("{}", " ".repeat(TEXT_AREA_MARGIN));
    print!("{}{prefix}", Theme::fg(&theme.colors.text_normal));
    print!(
        "{}{}{}{badge}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.badge_fg),
        Theme::bg(theme.colors.badge(result.category)),
        Theme::reset()
    );
    print!("{}{latency}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());

    let used = TEXT_AREA_MARGIN + prefix.len() + badge.chars().count() + latency.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
