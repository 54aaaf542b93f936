//! UI state for rendering.

use baatcheet_core::ChatSession;

use crate::event::BackendStatus;

/// Single-line text input with a character cursor.
#[derive(Debug, Default, Clone)]
pub struct InputLine {
    text: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text before the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        self.remove_at(self.cursor);
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn remove_at(&mut self, char_idx: usize) {
        if let Some((idx, ch)) = self.text.char_indices().nth(char_idx) {
            self.text.replace_range(idx..idx + ch.len_utf8(), "");
        }
    }
}

/// Everything the renderer needs (no async, no locks).
#[derive(Debug, Default)]
pub struct UiState {
    /// Conversation with the selected persona.
    pub session: ChatSession,

    /// Message being composed.
    pub input: InputLine,

    /// Lines scrolled back from the newest message (0 = follow).
    pub scroll_back: usize,

    /// Last observed backend reachability.
    pub backend: BackendStatus,

    /// Transient notice shown in the footer.
    pub notice: Option<String>,
}

impl UiState {
    pub fn new(session: ChatSession) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    pub fn follow(&mut self) {
        self.scroll_back = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_editing_is_char_based() {
        let mut input = InputLine::default();
        for c in "chai☕".chars() {
            input.insert(c);
        }
        assert_eq!(input.cursor(), 5);

        input.left();
        input.left();
        input.insert('!');
        assert_eq!(input.text(), "cha!i☕");
        assert_eq!(input.before_cursor(), "cha!");

        input.end();
        input.backspace();
        assert_eq!(input.text(), "cha!i");

        input.home();
        input.delete();
        assert_eq!(input.text(), "ha!i");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_input_bounds() {
        let mut input = InputLine::default();
        input.backspace();
        input.left();
        input.delete();
        input.right();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = InputLine::default();
        input.insert(' ');
        input.insert('a');
        input.clear();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.before_cursor(), "");
    }
}
