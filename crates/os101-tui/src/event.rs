//! Key translation: crossterm events become [`AppEvent`]s so widgets never
//! see crossterm types.
//!
//! Keys resolve in two steps. Bindings shared by every mode are checked
//! first (`Ctrl+c`, `Esc`, `Enter`, `Backspace`, `Tab`, the arrow keys).
//! What remains depends on the [`KeyMode`]:
//!
//! | Key                  | Browse           | Insert    |
//! |----------------------|------------------|-----------|
//! | `q`                  | `Quit`           | `Char`    |
//! | `/`                  | `QueryFocus`     | `Char`    |
//! | `k` / `j`            | `Nav(Up/Down)`   | `Char`    |
//! | `g` / `Home`         | `ScrollToTop`    | `Char` / none |
//! | `G` / `End`          | `ScrollToBottom` | `Char` / none |
//! | `PageUp`, `Ctrl+u`   | `ScrollUp`       | none      |
//! | `PageDown`, `Ctrl+d` | `ScrollDown`     | none      |
//! | other printable      | `Char`           | `Char`    |

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Whether letters are shortcuts or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// The card list has focus.
    Browse,
    /// The query bar or command bar has focus.
    Insert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    /// Toggle focus between the card list and the query bar.
    FocusNext,
    QueryFocus,
    /// One page of cards up.
    ScrollUp,
    /// One page of cards down.
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Nav(Direction),
    Char(char),
    Backspace,
    Enter,
    Escape,
}

/// Translate a terminal event. Releases, repeats, mouse events and unbound
/// keys yield `None`.
pub fn translate(event: &Event, mode: KeyMode) -> Option<AppEvent> {
    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    shared(key).or_else(|| match mode {
        KeyMode::Browse => browse(key),
        KeyMode::Insert => insert(key),
    })
}

fn plain(key: &KeyEvent) -> bool {
    key.modifiers == KeyModifiers::NONE
}

fn typed(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if plain(key) || key.modifiers == KeyModifiers::SHIFT => Some(c),
        _ => None,
    }
}

fn shared(key: &KeyEvent) -> Option<AppEvent> {
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => AppEvent::Quit,
        KeyCode::Esc => AppEvent::Escape,
        KeyCode::Enter if plain(key) => AppEvent::Enter,
        KeyCode::Backspace if plain(key) => AppEvent::Backspace,
        KeyCode::Tab if plain(key) => AppEvent::FocusNext,
        KeyCode::Up => AppEvent::Nav(Direction::Up),
        KeyCode::Down => AppEvent::Nav(Direction::Down),
        KeyCode::Left => AppEvent::Nav(Direction::Left),
        KeyCode::Right => AppEvent::Nav(Direction::Right),
        _ => return None,
    };
    Some(event)
}

fn browse(key: &KeyEvent) -> Option<AppEvent> {
    let ctrl = key.modifiers == KeyModifiers::CONTROL;
    let event = match key.code {
        KeyCode::PageUp => AppEvent::ScrollUp,
        KeyCode::PageDown => AppEvent::ScrollDown,
        KeyCode::Char('u') if ctrl => AppEvent::ScrollUp,
        KeyCode::Char('d') if ctrl => AppEvent::ScrollDown,
        KeyCode::Home => AppEvent::ScrollToTop,
        KeyCode::End => AppEvent::ScrollToBottom,
        // Terminals disagree on whether SHIFT accompanies 'G'.
        KeyCode::Char('G') => AppEvent::ScrollToBottom,
        _ => match typed(key)? {
            'q' if plain(key) => AppEvent::Quit,
            '/' => AppEvent::QueryFocus,
            'k' if plain(key) => AppEvent::Nav(Direction::Up),
            'j' if plain(key) => AppEvent::Nav(Direction::Down),
            'g' if plain(key) => AppEvent::ScrollToTop,
            c => AppEvent::Char(c),
        },
    };
    Some(event)
}

fn insert(key: &KeyEvent) -> Option<AppEvent> {
    typed(key).map(AppEvent::Char)
}
