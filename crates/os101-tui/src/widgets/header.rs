//! Header widget: one line with the title, match counter and fetch time.

use crate::theme::Theme;
use chrono::{DateTime, Local, Utc};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Renders the 1-line strip at the top of the screen.
///
/// Keybinding hints (`q:quit  ?:help`) are right-aligned in the same row.
pub struct Header<'a> {
    /// (visible, total) once the directory has loaded.
    counts: Option<(usize, usize)>,
    fetched_at: Option<DateTime<Utc>>,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(
        counts: Option<(usize, usize)>,
        fetched_at: Option<DateTime<Utc>>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            counts,
            fetched_at,
            theme,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(
            " Open Source 101 — Projects ",
            self.theme.card_title.add_modifier(Modifier::BOLD),
        )];

        if let Some((visible, total)) = self.counts {
            spans.push(Span::raw(format!(" {visible} of {total} ")));
        }
        if let Some(at) = self.fetched_at {
            spans.push(Span::styled(
                format!(" fetched {} ", at.with_timezone(&Local).format("%H:%M:%S")),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
