//! os101 TUI: ratatui browser for the projects directory.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use os101_core::config::Config;
use tokio::runtime::Handle;

/// Open the browser. Must be called from outside the runtime's own threads;
/// the directory fetch is spawned onto `runtime`.
///
/// Returns the URL picked with `:open`, if any.
pub fn run(config: Config, runtime: Handle) -> anyhow::Result<Option<String>> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    let client = os101_client::http::build_client(&config)?;
    App::new(config, theme, client, runtime).run()
}
