//! `:` commands typed into the command bar.

use crate::{app::AppState, theme::Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// Switch to the named theme; unknown names get the default.
    Theme(String),
    /// Fetch the projects document again.
    Reload,
    /// Quit and hand the selected project's URL back to the caller.
    Open,
}

impl Command {
    /// Parse the text after the `:` prompt.
    ///
    /// Blank input is `Ok(None)`: the bar closes without doing anything.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.collect::<Vec<_>>().join(" ");

        let command = match name {
            "q" | "q!" | "quit" | "quit!" => Command::Quit,
            "help" | "h" => Command::Help,
            "r" | "reload" => Command::Reload,
            "o" | "open" => Command::Open,
            "theme" if argument.is_empty() => {
                return Err("usage: theme <default|gruvbox>".to_string())
            }
            "theme" => Command::Theme(argument),
            unknown => return Err(format!("unknown command: {unknown}")),
        };
        Ok(Some(command))
    }
}

pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Reload => s.reload_requested = true,
        Command::Open => {
            let Some((_, project)) = s.selected() else {
                tracing::debug!("open: nothing selected");
                return;
            };
            s.open_url = Some(project.url.clone());
            s.quit = true;
        }
    }
}
