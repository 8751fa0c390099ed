//! Project list widget: the scrollable card pane on the left.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select the previous card |
//! | `↓` / `j` | Select the next card |
//! | `PageUp` / `Ctrl+u` | Move one page up |
//! | `PageDown` / `Ctrl+d` | Move one page down |
//! | `g` / `G` | Jump to the first / last card |
//!
//! # Scroll semantics
//!
//! `cursor` and `offset` index the *filtered* view, not the directory. The
//! cursor is always kept within the visible window; moving it past the edge
//! auto-scrolls.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use os101_core::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
        Wrap,
    },
};

/// Rows per card: name, description, stack, separator.
const CARD_HEIGHT: usize = 4;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct ProjectListState {
    /// Position of the selected card within the filtered view.
    pub cursor: usize,
    /// First visible card within the filtered view.
    pub offset: usize,
    /// Cached from the last render so `handle()` can page correctly.
    last_capacity: Cell<usize>,
}

impl Default for ProjectListState {
    fn default() -> Self {
        Self {
            cursor: 0,
            offset: 0,
            last_capacity: Cell::new(8),
        }
    }
}

impl ProjectListState {
    fn capacity(&self) -> usize {
        self.last_capacity.get().max(1)
    }

    /// Back to the first card. Called whenever the filtered view changes.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.offset = 0;
    }

    fn follow_cursor(&mut self) {
        let cap = self.capacity();
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + cap {
            self.offset = self.cursor + 1 - cap;
        }
    }

    /// Handle a navigation event. `len` is the size of the filtered view.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }
        let last = len - 1;

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(self.capacity());
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + self.capacity()).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToBottom => self.cursor = last,
            _ => return,
        }

        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "list: moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// What the list pane has to show.
pub enum ListContent<'a> {
    Loading,
    Failed(&'a str),
    Ready {
        projects: &'a [Project],
        /// Directory indices of the projects matching the query.
        visible: &'a [usize],
        query: &'a str,
    },
}

pub struct ProjectList<'a> {
    content: ListContent<'a>,
    state: &'a ProjectListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ProjectList<'a> {
    pub fn new(
        content: ListContent<'a>,
        state: &'a ProjectListState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            content,
            state,
            focused,
            theme,
        }
    }
}

impl Widget for ProjectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Projects").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let (projects, visible, query) = match self.content {
            ListContent::Loading => {
                Paragraph::new(Span::styled("Loading projects…", self.theme.status_loading))
                    .render(inner, buf);
                return;
            }
            ListContent::Failed(message) => {
                Paragraph::new(vec![
                    Line::from(Span::styled(message.to_string(), self.theme.status_error)),
                    Line::from(""),
                    Line::from(Span::styled(
                        ":reload to try again",
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ])
                .wrap(Wrap { trim: true })
                .render(inner, buf);
                return;
            }
            ListContent::Ready {
                projects,
                visible,
                query,
            } => (projects, visible, query),
        };

        if visible.is_empty() {
            Paragraph::new(Span::styled(
                "No projects match your search.",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .render(inner, buf);
            return;
        }

        let capacity = (inner.height as usize / CARD_HEIGHT).max(1);
        // Cache for handle(); draw always runs before handle()
        self.state.last_capacity.set(capacity);

        let start = self.state.offset.min(visible.len() - 1);
        let end = (start + capacity).min(visible.len());
        let width = inner.width.saturating_sub(1) as usize;

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(capacity * CARD_HEIGHT);
        for (pos, &index) in visible.iter().enumerate().take(end).skip(start) {
            let mut card = render_card(&projects[index], index, query, width, self.theme);
            if self.focused && pos == self.state.cursor {
                for line in &mut card[..CARD_HEIGHT - 1] {
                    *line = std::mem::take(line)
                        .patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
            }
            lines.extend(card);
        }

        // The scrollbar strip sits inside the borders so its track matches
        // the rows of content.
        let text_area = Rect {
            width: inner.width.saturating_sub(1),
            ..inner
        };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(visible.len())
            .position(self.state.cursor)
            .viewport_content_length(capacity);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

fn render_card(
    project: &Project,
    index: usize,
    query: &str,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let accent = theme.card_accent(index);

    let mut title = vec![Span::styled("▌ ", accent)];
    title.extend(highlight(&project.name, query, theme.card_title, theme.search_highlight));

    let description = Line::from(vec![
        Span::styled("▌ ", accent),
        Span::styled(truncate(&project.description, width.saturating_sub(2)), theme.card_description),
    ]);

    let stack = project.stack.join(" · ");
    let stack = Line::from(vec![
        Span::styled("▌ ", accent),
        Span::styled(truncate(&stack, width.saturating_sub(2)), accent),
    ]);

    vec![Line::from(title), description, stack, Line::from("")]
}

/// Split `text` into spans, styling the first case-insensitive occurrence of
/// `query`.
///
/// Lowercasing can change a char's byte length (`Ω` shrinks, `İ` grows), so
/// the match is mapped back through per-char boundaries. A match that starts
/// or ends inside one original char is not highlighted.
fn highlight(text: &str, query: &str, base: Style, hit: Style) -> Vec<Span<'static>> {
    let plain = || vec![Span::styled(text.to_string(), base)];
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return plain();
    }

    // (offset in `lowered`, offset in `text`) at every char boundary.
    let mut lowered = String::with_capacity(text.len());
    let mut bounds = Vec::with_capacity(text.len() + 1);
    for (i, c) in text.char_indices() {
        bounds.push((lowered.len(), i));
        lowered.extend(c.to_lowercase());
    }
    bounds.push((lowered.len(), text.len()));
    let original = |at: usize| {
        bounds
            .binary_search_by_key(&at, |&(low, _)| low)
            .ok()
            .map(|k| bounds[k].1)
    };

    let Some(at) = lowered.find(&needle) else {
        return plain();
    };
    match (original(at), original(at + needle.len())) {
        (Some(start), Some(end)) => vec![
            Span::styled(text[..start].to_string(), base),
            Span::styled(text[start..end].to_string(), base.patch(hit)),
            Span::styled(text[end..].to_string(), base),
        ],
        _ => plain(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = ProjectListState::default();
        s.handle(&AppEvent::Nav(Direction::Up), 3);
        assert_eq!(s.cursor, 0);
        for _ in 0..10 {
            s.handle(&AppEvent::Nav(Direction::Down), 3);
        }
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn window_follows_cursor() {
        let mut s = ProjectListState::default();
        s.last_capacity.set(2);
        s.handle(&AppEvent::ScrollToBottom, 10);
        assert_eq!((s.cursor, s.offset), (9, 8));
        s.handle(&AppEvent::ScrollToTop, 10);
        assert_eq!((s.cursor, s.offset), (0, 0));
    }

    #[test]
    fn empty_view_resets() {
        let mut s = ProjectListState {
            cursor: 4,
            offset: 2,
            ..ProjectListState::default()
        };
        s.handle(&AppEvent::Nav(Direction::Down), 0);
        assert_eq!((s.cursor, s.offset), (0, 0));
    }

    #[test]
    fn highlight_marks_case_insensitive_match() {
        let spans = highlight("RustLings", "lings", Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["Rust", "Lings", ""]);
    }

    #[test]
    fn highlight_maps_back_across_width_changing_lowercase() {
        let spans = highlight("\u{2126}mega", "MEGA", Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["\u{2126}", "mega", ""]);
    }

    #[test]
    fn highlight_inside_an_expanded_char_is_left_plain() {
        // 'İ' lowercases to "i\u{307}", so "i" matches half of one char.
        let spans = highlight("\u{2126}\u{130}", "i", Style::default(), Style::default());
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["\u{2126}\u{130}"]);
    }

    #[test]
    fn highlight_without_match_is_single_span() {
        let spans = highlight("ratatui", "tokio", Style::default(), Style::default());
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
