//! Single-line text buffer shared by the query bar and the command bar.

use crate::event::{AppEvent, Direction};

/// Text plus a cursor held as a byte offset that always sits on a char
/// boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineInput {
    text: String,
    cursor: usize,
}

impl LineInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply an editing event. Returns true when the text changed; cursor
    /// movement alone returns false.
    ///
    /// `Char` inserts at the cursor, `Backspace` deletes the character before
    /// it, `Nav(Left)` and `Nav(Right)` move it. Anything else is ignored.
    pub fn edit(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                true
            }
            AppEvent::Backspace => match self.before_cursor() {
                Some(prev) => {
                    self.text.remove(prev);
                    self.cursor = prev;
                    true
                }
                None => false,
            },
            AppEvent::Nav(Direction::Left) => {
                self.cursor = self.before_cursor().unwrap_or(0);
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
                false
            }
            _ => false,
        }
    }

    /// Empty the buffer. Returns true when there was text to drop.
    pub fn clear(&mut self) -> bool {
        self.cursor = 0;
        let had_text = !self.text.is_empty();
        self.text.clear();
        had_text
    }

    /// Display column of the cursor, counted in chars from the start.
    pub fn cursor_col(&self) -> u16 {
        let chars = self.text[..self.cursor].chars().count();
        u16::try_from(chars).unwrap_or(u16::MAX)
    }

    fn before_cursor(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> LineInput {
        let mut input = LineInput::default();
        for c in s.chars() {
            assert!(input.edit(&AppEvent::Char(c)));
        }
        input
    }

    #[test]
    fn backspace_removes_whole_chars() {
        let mut input = typed("rüst");
        assert!(input.edit(&AppEvent::Backspace));
        assert!(input.edit(&AppEvent::Backspace));
        assert_eq!(input.text(), "rü");
        assert!(input.edit(&AppEvent::Backspace));
        assert_eq!(input.text(), "r");
        assert_eq!(input.cursor_col(), 1);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut input = typed("aü");
        assert!(!input.edit(&AppEvent::Nav(Direction::Left)));
        assert_eq!(input.cursor_col(), 1);
        input.edit(&AppEvent::Char('x'));
        assert_eq!(input.text(), "axü");
        input.edit(&AppEvent::Nav(Direction::Right));
        input.edit(&AppEvent::Nav(Direction::Right));
        assert_eq!(input.cursor_col(), 3);
    }

    #[test]
    fn edges_are_no_ops() {
        let mut input = LineInput::default();
        assert!(!input.edit(&AppEvent::Backspace));
        assert!(!input.edit(&AppEvent::Nav(Direction::Left)));
        assert!(!input.edit(&AppEvent::Enter));
        assert!(!input.clear());

        let mut input = typed("go");
        assert!(input.clear());
        assert!(input.is_empty());
        assert_eq!(input.cursor_col(), 0);
    }
}
