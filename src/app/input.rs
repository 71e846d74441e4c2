//! Editable text buffer behind the text area.
//!
//! The cursor is a char index, so editing is UTF-8 safe. Home/End work on the
//! current line, which matters once the user inserts newlines.

/// The raw text the user is composing, plus a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    /// Cursor position in chars, `0..=char_count`.
    cursor: usize,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding `text` with the cursor at the end.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Removes the char before the cursor. Returns false at the start.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Removes the char under the cursor. Returns false at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Moves to the start of the current line.
    pub fn move_home(&mut self) -> bool {
        let start = self
            .text
            .chars()
            .take(self.cursor)
            .collect::<Vec<_>>()
            .iter()
            .rposition(|&c| c == '\n')
            .map_or(0, |newline| newline + 1);
        let moved = start != self.cursor;
        self.cursor = start;
        moved
    }

    /// Moves to the end of the current line.
    pub fn move_end(&mut self) -> bool {
        let end = self
            .text
            .chars()
            .skip(self.cursor)
            .position(|c| c == '\n')
            .map_or_else(|| self.char_count(), |offset| self.cursor + offset);
        let moved = end != self.cursor;
        self.cursor = end;
        moved
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut buffer = InputBuffer::new();
        text.chars().for_each(|c| buffer.insert(c));
        buffer
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut buffer = typed("hllo");
        buffer.move_home();
        buffer.move_right();
        buffer.insert('e');
        assert_eq!(buffer.text(), "hello");
        assert_eq!(buffer.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut buffer = typed("ab");
        assert!(!buffer.delete());
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "a");
        buffer.move_home();
        assert!(!buffer.backspace());
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn editing_is_utf8_safe() {
        let mut buffer = typed("it’s 🎮");
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "it’s ");
        buffer.move_left();
        buffer.move_left();
        buffer.backspace();
        assert_eq!(buffer.text(), "its ");
    }

    #[test]
    fn home_and_end_work_per_line() {
        let mut buffer = typed("first\nsecond");
        assert_eq!(buffer.cursor(), 12);
        buffer.move_home();
        assert_eq!(buffer.cursor(), 6);
        buffer.move_left();
        assert_eq!(buffer.cursor(), 5);
        buffer.move_home();
        assert_eq!(buffer.cursor(), 0);
        buffer.move_end();
        assert_eq!(buffer.cursor(), 5);
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut buffer = InputBuffer::with_text("abc");
        buffer.clear();
        assert_eq!(buffer, InputBuffer::new());
    }
}
