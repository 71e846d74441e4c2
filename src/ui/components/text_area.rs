//! Text area component renderer.
//!
//! Draws the bordered entry box. Lines arrive already wrapped and windowed
//! by the view model; this only paints them.

use crate::app::state::TEXT_AREA_MARGIN;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TextAreaInfo;

/// Renders the text box starting at `row`.
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ text with cursor │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// Occupies `visible_rows + 2` rows and returns the next available row. The
/// cursor cell is drawn in the cursor colors; the placeholder is dimmed.
pub fn render_text_area(row: usize, area: &TextAreaInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(TEXT_AREA_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let text_width = inner_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.input_border);
    let margin = " ".repeat(TEXT_AREA_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    for offset in 0..area.visible_rows {
        position_cursor(row + 1 + offset, 1);
        print!("{margin}{border}│ {}", Theme::reset());

        let cursor_col = area
            .cursor
            .filter(|(cursor_row, _)| *cursor_row == offset)
            .map(|(_, col)| col);

        match (&area.placeholder, offset) {
            (Some(placeholder), 0) => render_placeholder(placeholder, cursor_col, theme, text_width),
            _ => {
                let line = area.lines.get(offset).map_or("", String::as_str);
                render_line(line, cursor_col, theme, text_width);
            }
        }

        print!("{border} │{}", Theme::reset());
    }

    let bottom = row + 1 + area.visible_rows;
    position_cursor(bottom, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    bottom + 1
}

fn render_line(line: &str, cursor_col: Option<usize>, theme: &Theme, width: usize) {
    let fitted: Vec<char> = fit(line, width).chars().collect();
    print!("{}", Theme::fg(&theme.colors.text_normal));

    match cursor_col.filter(|col| *col < width) {
        Some(col) => {
            let before: String = fitted[..col].iter().collect();
            let after: String = fitted[col + 1..].iter().collect();
            print!("{before}");
            print_cursor_cell(fitted[col], theme);
            print!("{}{after}", Theme::fg(&theme.colors.text_normal));
        }
        None => print!("{}", fitted.iter().collect::<String>()),
    }

    print!("{}", Theme::reset());
}

/// The cursor sits on the first placeholder char so typing visibly replaces it.
fn render_placeholder(placeholder: &str, cursor_col: Option<usize>, theme: &Theme, width: usize) {
    let fitted = fit(placeholder, width);
    let mut chars = fitted.chars();

    if cursor_col.is_some() && width > 0 {
        if let Some(first) = chars.next() {
            print_cursor_cell(first, theme);
        }
    }

    print!("{}{}", Theme::fg(&theme.colors.text_dim), Theme::dim());
    print!("{}", chars.collect::<String>());
    print!("{}", Theme::reset());
}

fn print_cursor_cell(c: char, theme: &Theme) {
    print!(
        "{}{}{c}{}",
        Theme::fg(&theme.colors.cursor_fg),
        Theme::bg(&theme.colors.cursor_bg),
        Theme::reset()
    );
}
