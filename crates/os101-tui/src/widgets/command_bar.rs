//! `:` command line, drawn over the bottom row while command mode is active.
//! `Enter` runs the line through [`crate::commands::Command::parse`].

use super::line_input::LineInput;
use crate::event::AppEvent;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

#[derive(Debug, Default)]
pub struct CommandBarState {
    /// Text after the `:` prompt.
    pub input: LineInput,
    /// Parse error from the last `Enter`; shown until the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.input.edit(event);
    }

    /// Terminal column for the cursor; the prompt takes column 0.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        area.x
            .saturating_add(1)
            .saturating_add(self.input.cursor_col())
            .min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let line = match &self.state.error {
            Some(err) => Line::styled(format!("E  {err}"), self.theme.status_error),
            None => Line::from(vec![
                Span::styled(":", self.theme.border_command_bar.add_modifier(Modifier::BOLD)),
                Span::raw(self.state.input.text()),
            ]),
        };
        line.render(area, buf);
    }
}
