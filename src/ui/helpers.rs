//! Shared rendering utilities.
//!
//! Widths here are counted in chars, which matches terminal cells for the
//! text this plugin shows (wide glyphs may overhang by a cell).

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates or pads `text` to exactly `width` chars.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let used = fitted.chars().count();
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

/// Left padding that centers `len` chars within `cols`.
#[must_use]
pub const fn centered_padding(len: usize, cols: usize) -> usize {
    cols.saturating_sub(len) / 2
}

/// Hard-wraps `text` at `width` chars and locates the cursor.
///
/// Explicit newlines always start a new row. Returns the rows and the cursor
/// as `(row, column)`. A cursor sitting right after a full row is placed at
/// the start of an extra empty row so it never falls outside the box.
///
/// # Example
///
/// ```rust
/// use zentiment::ui::helpers::wrap_input;
///
/// let (lines, cursor) = wrap_input("abcde\nf", 7, 3);
/// assert_eq!(lines, vec!["abc", "de", "f"]);
/// assert_eq!(cursor, (2, 1));
/// ```
#[must_use]
pub fn wrap_input(text: &str, cursor: usize, width: usize) -> (Vec<String>, (usize, usize)) {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut cursor_at = (0, 0);
    let mut offset = 0;

    for logical in text.split('\n') {
        let chars: Vec<char> = logical.chars().collect();
        let first_row = lines.len();

        if chars.is_empty() {
            lines.push(String::new());
        } else {
            lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }

        if (offset..=offset + chars.len()).contains(&cursor) {
            let column = cursor - offset;
            let row = first_row + column / width;
            if row == lines.len() {
                lines.push(String::new());
            }
            cursor_at = (row, column % width);
        }

        offset += chars.len() + 1;
    }

    (lines, cursor_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("ñandú", 5), "ñandú");
    }

    #[test]
    fn wrap_keeps_blank_lines() {
        let (lines, cursor) = wrap_input("a\n\nb", 2, 10);
        assert_eq!(lines, vec!["a", "", "b"]);
        assert_eq!(cursor, (1, 0));
    }

    #[test]
    fn cursor_after_full_row_moves_to_fresh_row() {
        let (lines, cursor) = wrap_input("abcd\nx", 4, 2);
        assert_eq!(lines, vec!["ab", "cd", "", "x"]);
        assert_eq!(cursor, (2, 0));
    }

    #[test]
    fn cursor_inside_wrapped_line() {
        let (lines, cursor) = wrap_input("abcdef", 3, 4);
        assert_eq!(lines, vec!["abcd", "ef"]);
        assert_eq!(cursor, (0, 3));
    }

    #[test]
    fn empty_text_has_one_row() {
        assert_eq!(wrap_input("", 0, 5), (vec![String::new()], (0, 0)));
    }
}
