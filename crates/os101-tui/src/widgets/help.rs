//! Keybinding reference, floated over the middle of the screen by `?`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Cell, Clear, Row, Table, Widget},
};

/// Sections of (keys, action).
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browse",
        &[
            ("↑ k / ↓ j", "Previous / next project"),
            ("PageUp Ctrl+u / PageDown Ctrl+d", "Page up / down"),
            ("g Home / G End", "First / last project"),
            ("Esc", "Clear the search"),
            ("q  Ctrl+c", "Quit"),
        ],
    ),
    (
        "Search",
        &[
            ("/  Tab", "Focus the search bar"),
            ("Enter  Esc  Tab", "Back to the list"),
        ],
    ),
    (
        "Commands",
        &[
            (":reload", "Fetch projects.json again"),
            (":open", "Print the selected URL on exit"),
            (":theme <name>", "default, gruvbox"),
            (":q", "Quit"),
        ],
    ),
];

const POPUP_WIDTH: u16 = 72;

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn rows(&self) -> Vec<Row<'static>> {
        let heading = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let keys = Style::default().add_modifier(Modifier::BOLD);
        let mut rows = Vec::new();
        for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new([Cell::from("")]));
            }
            rows.push(Row::new([Cell::from(*title).style(heading)]));
            rows.extend(bindings.iter().map(|(key, action)| {
                Row::new([Cell::from(*key).style(keys), Cell::from(*action)])
            }));
        }
        rows
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows();
        // Rows plus the border.
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX).saturating_add(2);
        let popup = centered(POPUP_WIDTH, height, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" Keybindings · ? to close ")
            .border_style(self.theme.border_focused);
        Table::new(rows, [Constraint::Length(34), Constraint::Fill(1)])
            .block(block)
            .column_spacing(2)
            .render(popup, buf);
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn popup_shrinks_to_small_terminals() {
        let r = centered(POPUP_WIDTH, 40, Rect::new(0, 0, 40, 10));
        assert_eq!((r.x, r.y, r.width, r.height), (0, 0, 40, 10));
    }

    #[test]
    fn popup_is_centred() {
        let r = centered(80, 10, Rect::new(0, 0, 100, 30));
        assert_eq!((r.x, r.y, r.width, r.height), (10, 10, 80, 10));
    }

    #[test]
    fn lists_every_section() {
        let theme = Theme::load_default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| f.render_widget(HelpPopup::new(&theme), f.area()))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        for needle in ["Browse", "Search", "Commands", ":reload", "Keybindings"] {
            assert!(screen.contains(needle), "missing {needle}");
        }
    }
}
