//! Detail pane: the full record of the selected project.

use crate::theme::Theme;
use os101_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ProjectDetail<'a> {
    /// Selected project and its directory index, if any.
    selected: Option<(usize, &'a Project)>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProjectDetail<'a> {
    pub fn new(selected: Option<(usize, &'a Project)>, focused: bool, theme: &'a Theme) -> Self {
        Self {
            selected,
            focused,
            theme,
        }
    }
}

impl Widget for ProjectDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Details").border_style(border_style);

        let Some((index, project)) = self.selected else {
            Paragraph::new(Span::styled(
                "Nothing selected",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .block(block)
            .render(area, buf);
            return;
        };

        let label = Style::default().add_modifier(Modifier::BOLD);
        let accent = self.theme.card_accent(index);

        let mut lines = vec![
            Line::from(Span::styled(project.name.clone(), self.theme.card_title.patch(accent))),
            Line::from(""),
            Line::from(Span::styled(project.description.clone(), self.theme.card_description)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Repository  ", label),
                Span::styled(project.url.clone(), self.theme.card_url),
            ]),
        ];

        if !project.stack.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Tech stack", label)));
            lines.extend(
                project
                    .stack
                    .iter()
                    .map(|tech| Line::from(vec![Span::styled("  • ", accent), Span::raw(tech.clone())])),
            );
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            ":open prints this URL on exit",
            Style::default().add_modifier(Modifier::DIM),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
