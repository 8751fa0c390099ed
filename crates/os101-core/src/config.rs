//! Configuration types for os101.
//!
//! [`Config::load`] reads `~/.config/os101/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then layers an optional
//! explicit file and `OS101_*` environment variables on top.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[api]
base_url     = "http://localhost:3000"
timeout_secs = 30

[projects]
url = "https://raw.githubusercontent.com/shubham-dev4me/opensource101/main/projects.json"

[ui]
theme               = "default"
list_pane_width_pct = 45
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[api]` section: where the registration backend lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. `0` leaves the HTTP client's default in place.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String { "http://localhost:3000".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[projects]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectsConfig {
    #[serde(default = "default_projects_url")]
    pub url: String,
}

fn default_projects_url() -> String { crate::directory::DEFAULT_PROJECTS_URL.to_string() }

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self { url: default_projects_url() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_list_pane_width_pct")]
    pub list_pane_width_pct: u16,
}

fn default_theme() -> String { "default".to_string() }
fn default_list_pane_width_pct() -> u16 { 45 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            list_pane_width_pct: default_list_pane_width_pct(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/os101/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    ///
    /// `extra`, when given, must exist and overrides the user file.
    /// `OS101_API__BASE_URL`-style environment variables override both.
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }

        Self::from_sources(&path, extra)
    }

    /// Layer defaults, `user` (optional), `extra` (required) and the
    /// environment, without creating anything on disk.
    pub fn from_sources(user: &Path, extra: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(user).required(false));

        if let Some(extra) = extra {
            builder = builder.add_source(config::File::from(extra).required(true));
        }

        builder
            .add_source(
                config::Environment::with_prefix("OS101")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Per-request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<std::time::Duration> {
        match self.api.timeout_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file, honouring `XDG_CONFIG_HOME`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("os101")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
