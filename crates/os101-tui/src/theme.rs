//! Colour themes for the projects browser.
//!
//! Built-in themes are TOML documents compiled into the binary, so the
//! browser needs nothing on disk. [`Theme::by_name`] resolves the name from
//! `ui.theme` or the `:theme` command; unknown names get the default.
//!
//! Card accents cycle through the palette by a project's position in the
//! unfiltered directory, so a card keeps its colour while the list is searched.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// (accepted names, TOML source). The first entry is the default.
const BUILTIN: &[(&[&str], &str)] = &[
    (&["default"], include_str!("themes/default.toml")),
    (
        &["gruvbox", "gruvbox_dark", "gruvbox-dark"],
        include_str!("themes/gruvbox_dark.toml"),
    ),
];

#[derive(Debug, Deserialize)]
struct StyleSpec {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
}

impl StyleSpec {
    fn resolve(&self) -> Style {
        let base = Style::default();
        let base = match self.fg.as_deref().and_then(parse_color) {
            Some(c) => base.fg(c),
            None => base,
        };
        let base = match self.bg.as_deref().and_then(parse_color) {
            Some(c) => base.bg(c),
            None => base,
        };
        self.modifiers
            .iter()
            .filter_map(|m| parse_modifier(m))
            .fold(base, Style::add_modifier)
    }
}

#[derive(Debug, Deserialize)]
struct ThemeSpec {
    borders: BorderSpec,
    search: SearchSpec,
    cards: CardSpec,
    status: StatusSpec,
}

#[derive(Debug, Deserialize)]
struct BorderSpec {
    focused: StyleSpec,
    command_bar: StyleSpec,
    unfocused: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct SearchSpec {
    highlight: StyleSpec,
}

#[derive(Debug, Deserialize)]
struct CardSpec {
    title: StyleSpec,
    description: StyleSpec,
    url: StyleSpec,
    #[serde(default)]
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StatusSpec {
    loading: StyleSpec,
    error: StyleSpec,
}

/// Resolved styles, ready to hand to widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_command_bar: Style,
    pub border_unfocused: Style,

    /// Applied to the part of a project name that matches the query.
    pub search_highlight: Style,

    pub card_title: Style,
    pub card_description: Style,
    pub card_url: Style,

    pub status_loading: Style,
    pub status_error: Style,

    card_palette: Vec<Color>,
}

impl Theme {
    /// The embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(BUILTIN[0].1).expect("embedded default theme must be valid TOML")
    }

    pub fn by_name(name: &str) -> Self {
        let wanted = name.trim().to_ascii_lowercase();
        BUILTIN
            .iter()
            .find(|(names, _)| names.contains(&wanted.as_str()))
            .and_then(|(_, src)| match Self::from_toml_str(src) {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(theme = %wanted, error = %e, "built-in theme failed to load");
                    None
                }
            })
            .unwrap_or_else(Self::load_default)
    }

    /// Parse a theme document. Unknown keys, colours and modifiers are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let ThemeSpec {
            borders,
            search,
            cards,
            status,
        }: ThemeSpec = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: borders.focused.resolve(),
            border_command_bar: borders.command_bar.resolve(),
            border_unfocused: borders.unfocused.resolve(),
            search_highlight: search.highlight.resolve(),
            card_title: cards.title.resolve(),
            card_description: cards.description.resolve(),
            card_url: cards.url.resolve(),
            status_loading: status.loading.resolve(),
            status_error: status.error.resolve(),
            card_palette: cards.palette.iter().filter_map(|c| parse_color(c)).collect(),
        })
    }

    /// Accent for the card at `index` in the unfiltered directory.
    pub fn card_accent(&self, index: usize) -> Style {
        match self.card_palette.len() {
            0 => Style::default(),
            n => Style::default().fg(self.card_palette[index % n]),
        }
    }
}

fn parse_modifier(name: &str) -> Option<Modifier> {
    let modifier = match name.to_ascii_lowercase().as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "reversed" => Modifier::REVERSED,
        _ => return None,
    };
    Some(modifier)
}

/// Named terminal colours, `#rrggbb`, or `indexed:N`.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let rgb = u32::from_str_radix(hex, 16).ok()?;
        let [_, r, g, b] = rgb.to_be_bytes();
        return Some(Color::Rgb(r, g, b));
    }
    if let Some(n) = s.strip_prefix("indexed:") {
        return n.parse().ok().map(Color::Indexed);
    }
    let named = match s.replace('-', "_").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" => Color::DarkGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_cyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(named)
}
