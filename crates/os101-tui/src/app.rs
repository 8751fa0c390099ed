//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. The projects document is
//! fetched on a task spawned onto the caller's tokio runtime; the outcome
//! comes back over an mpsc channel that the loop drains between frames.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, KeyMode},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        header::Header,
        help::HelpPopup,
        line_input::LineInput,
        project_detail::ProjectDetail,
        project_list::{ListContent, ProjectList, ProjectListState},
        query_bar::QueryBar,
    },
};
use crossterm::{
    event as ct_event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use os101_core::{config::Config, search, Error, Project, ProjectDirectory};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::{runtime::Handle, sync::mpsc};

type LoadResult = Result<ProjectDirectory, Error>;

// ---------------------------------------------------------------------------
// Focus + load types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    /// The load failed; holds the user-facing message.
    Failed(String),
    Ready(ProjectDirectory),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub load: LoadState,
    /// Directory indices matching the current query, in directory order.
    pub visible: Vec<usize>,
    pub list: ProjectListState,
    pub query: LineInput,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    /// Set by `:reload`; the event loop starts a new fetch and clears it.
    pub reload_requested: bool,
    /// Set by `:open`; handed back to the caller on exit.
    pub open_url: Option<String>,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            load: LoadState::Loading,
            visible: Vec::new(),
            list: ProjectListState::default(),
            query: LineInput::default(),
            focus: Focus::List,
            prev_focus: Focus::List,
            theme,
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            reload_requested: false,
            open_url: None,
            quit: false,
        }
    }

    /// Install the outcome of a directory load.
    pub fn apply_load(&mut self, result: LoadResult) {
        self.load = match result {
            Ok(directory) => {
                tracing::info!(
                    projects = directory.projects.len(),
                    source = %directory.source,
                    "directory loaded"
                );
                LoadState::Ready(directory)
            }
            Err(e) => {
                tracing::warn!(error = %e, "directory load failed");
                LoadState::Failed(e.to_string())
            }
        };
        self.refilter();
    }

    /// Recompute the visible indices for the current query.
    pub fn refilter(&mut self) {
        self.visible = match &self.load {
            LoadState::Ready(directory) => {
                search::filter_indices(&directory.projects, self.query.text())
            }
            _ => Vec::new(),
        };
        self.list.reset();
        tracing::debug!(query = %self.query.text(), visible = self.visible.len(), "refiltered");
    }

    fn projects(&self) -> &[Project] {
        match &self.load {
            LoadState::Ready(directory) => &directory.projects,
            _ => &[],
        }
    }

    /// The highlighted project with its directory index.
    pub fn selected(&self) -> Option<(usize, &Project)> {
        let index = *self.visible.get(self.list.cursor)?;
        self.projects().get(index).map(|p| (index, p))
    }

    /// (visible, total) once the directory has loaded.
    pub fn counts(&self) -> Option<(usize, usize)> {
        match &self.load {
            LoadState::Ready(directory) => Some((self.visible.len(), directory.projects.len())),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(
                event,
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit
            ) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        if self.focus == Focus::Command {
            self.handle_command_bar(event);
            return;
        }

        match event {
            AppEvent::Char('?') if self.focus == Focus::List => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }

            AppEvent::Char(':') if self.focus == Focus::List => {
                tracing::debug!("entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }

            AppEvent::Escape => match self.focus {
                Focus::QueryBar => {
                    tracing::debug!("focus: QueryBar -> List");
                    self.focus = Focus::List;
                }
                _ => {
                    if self.query.clear() {
                        self.refilter();
                    }
                }
            },

            AppEvent::Enter if self.focus == Focus::QueryBar => {
                self.focus = Focus::List;
            }

            AppEvent::FocusNext => {
                self.focus = match self.focus {
                    Focus::List => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::List,
                };
                tracing::debug!(to = ?self.focus, "focus cycle");
            }

            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                self.focus = Focus::QueryBar;
            }

            other => match self.focus {
                Focus::QueryBar => {
                    if self.query.edit(&other) {
                        self.refilter();
                    }
                }
                _ => self.list.handle(&other, self.visible.len()),
            },
        }
    }

    fn handle_command_bar(&mut self, event: AppEvent) {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = self.prev_focus;
            }
            AppEvent::Enter => match Command::parse(self.command_bar.input.text()) {
                Ok(cmd) => {
                    self.command_bar.clear();
                    self.focus = self.prev_focus;
                    if let Some(cmd) = cmd {
                        tracing::debug!(command = ?cmd, "executing command");
                        execute_command(self, cmd);
                    }
                }
                // The bar stays open showing the error.
                Err(msg) => self.command_bar.error = Some(msg),
            },
            other => self.command_bar.handle(&other),
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    runtime: Handle,
    client: reqwest::Client,
    tx: mpsc::UnboundedSender<LoadResult>,
    rx: mpsc::UnboundedReceiver<LoadResult>,
}

impl App {
    pub fn new(config: Config, theme: Theme, client: reqwest::Client, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config, theme),
            runtime,
            client,
            tx,
            rx,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on
    /// exit. Returns the URL chosen with `:open`, if any.
    pub fn run(mut self) -> anyhow::Result<Option<String>> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        self.start_load();
        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result.map(|()| self.state.open_url)
    }

    fn start_load(&mut self) {
        let url = self.state.config.projects.url.clone();
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.state.load = LoadState::Loading;
        self.state.refilter();
        tracing::debug!(%url, "spawning directory load");

        self.runtime.spawn(async move {
            let result = os101_client::projects::fetch_projects(&client, &url).await;
            // The receiver only goes away when the app has exited.
            let _ = tx.send(result);
        });
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            while let Ok(result) = self.rx.try_recv() {
                self.state.apply_load(result);
            }

            if self.state.reload_requested {
                self.state.reload_requested = false;
                if matches!(self.state.load, LoadState::Loading) {
                    tracing::debug!("reload ignored: load in flight");
                } else {
                    self.start_load();
                }
            }

            terminal.draw(|frame| draw(frame, &self.state))?;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Some(ev) = event::translate(&raw, key_mode(self.state.focus)) {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

/// Letters are text while either input bar has focus.
fn key_mode(focus: Focus) -> KeyMode {
    match focus {
        Focus::List => KeyMode::Browse,
        Focus::QueryBar | Focus::Command => KeyMode::Insert,
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let [header_area, body, query_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    let pct = state.config.ui.list_pane_width_pct.clamp(10, 90);
    let [list_area, detail_area] =
        Layout::horizontal([Constraint::Percentage(pct), Constraint::Fill(1)]).areas(body);

    let fetched_at = match &state.load {
        LoadState::Ready(directory) => Some(directory.fetched_at),
        _ => None,
    };
    frame.render_widget(Header::new(state.counts(), fetched_at, &state.theme), header_area);

    let content = match &state.load {
        LoadState::Loading => ListContent::Loading,
        LoadState::Failed(message) => ListContent::Failed(message),
        LoadState::Ready(directory) => ListContent::Ready {
            projects: &directory.projects,
            visible: &state.visible,
            query: state.query.text(),
        },
    };
    frame.render_widget(
        ProjectList::new(content, &state.list, state.focus == Focus::List, &state.theme),
        list_area,
    );
    frame.render_widget(
        ProjectDetail::new(state.selected(), false, &state.theme),
        detail_area,
    );

    let counts = state.counts().unwrap_or((0, 0));
    let query_bar = QueryBar::new(
        &state.query,
        state.focus == Focus::QueryBar,
        counts,
        &state.theme,
    );
    let cursor = query_bar.cursor_position(query_area);
    frame.render_widget(query_bar, query_area);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::QueryBar {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
