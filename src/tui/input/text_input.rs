//! Text input field handling.

use unicode_width::UnicodeWidthStr;

/// State for a single-line text input field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    /// The current text content.
    content: String,
    /// Cursor position (character index).
    cursor: usize,
}

impl TextInput {
    /// Creates a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Deletes the character at the cursor position (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.content.remove(at);
        }
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the beginning.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal columns between the start of the field and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let width = self.content[..self.byte_index()].width();
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn insert_appends_and_advances() {
        let input = typed("a@b.com");
        assert_eq!(input.as_str(), "a@b.com");
        assert_eq!(input.cursor(), 7);
    }

    #[test]
    fn edits_in_the_middle() {
        let mut input = typed("ab.com");
        input.move_home();
        input.move_right();
        input.insert('@');
        assert_eq!(input.as_str(), "a@b.com");

        input.backspace();
        assert_eq!(input.as_str(), "ab.com");
        input.delete();
        assert_eq!(input.as_str(), "a.com");
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut input = typed("josé@b.com");
        input.move_home();
        for _ in 0..4 {
            input.move_right();
        }
        input.backspace();
        assert_eq!(input.as_str(), "jos@b.com");
        assert_eq!(input.cursor_column(), 3);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.delete();
        assert_eq!(input.as_str(), "ab");
        input.move_home();
        input.move_left();
        input.backspace();
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.as_str(), "ab");
        input.move_end();
        assert_eq!(input.cursor_column(), 2);
    }
}
