//! Search box under the card list, with the `visible/total` counter on the
//! right. Typing here refilters the list on every keystroke.

use super::line_input::LineInput;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search projects by name, tech stack, or description";

pub struct QueryBar<'a> {
    input: &'a LineInput,
    focused: bool,
    /// (visible, total) project counts.
    counts: (usize, usize),
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        input: &'a LineInput,
        focused: bool,
        counts: (usize, usize),
        theme: &'a Theme,
    ) -> Self {
        Self {
            input,
            focused,
            counts,
            theme,
        }
    }

    /// Where the terminal cursor goes when the bar has focus. Text starts
    /// inside the border, at (x+1, y+1).
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(self.input.cursor_col())
            .min(area.right().saturating_sub(1));
        (x, area.y + 1)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = match self.focused {
            true => self.theme.border_focused,
            false => self.theme.border_unfocused,
        };
        let block = Block::bordered().title("Search").border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        let [text_area, count_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(inner);

        let text = if self.input.is_empty() && !self.focused {
            Line::styled(PLACEHOLDER, Style::default().add_modifier(Modifier::DIM))
        } else {
            Line::raw(self.input.text())
        };
        Paragraph::new(text).render(text_area, buf);

        let (visible, total) = self.counts;
        Line::raw(format!("{visible}/{total}"))
            .right_aligned()
            .render(count_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::AppEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(input: &LineInput, focused: bool) -> String {
        let theme = Theme::load_default();
        let mut terminal = Terminal::new(TestBackend::new(70, 3)).unwrap();
        terminal
            .draw(|f| f.render_widget(QueryBar::new(input, focused, (2, 9), &theme), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(70)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn unfocused_empty_bar_shows_placeholder_and_counts() {
        let screen = render(&LineInput::default(), false);
        assert!(screen.contains("Search projects by name"));
        assert!(screen.contains("2/9"));
    }

    #[test]
    fn typed_text_replaces_placeholder() {
        let mut input = LineInput::default();
        for c in "rust".chars() {
            input.edit(&AppEvent::Char(c));
        }
        let screen = render(&input, true);
        assert!(screen.contains("rust"));
        assert!(!screen.contains("Search projects by name"));
    }

    #[test]
    fn cursor_sits_after_the_text() {
        let theme = Theme::load_default();
        let mut input = LineInput::default();
        input.edit(&AppEvent::Char('é'));
        let bar = QueryBar::new(&input, true, (0, 0), &theme);
        assert_eq!(bar.cursor_position(Rect::new(0, 20, 40, 3)), (2, 21));
    }
}
