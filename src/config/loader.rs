//! Configuration file loading with precedence handling.

use crate::state::ThemeMode;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Startup theme ("light" or "dark"), overriding the stored preference.
    #[serde(default)]
    pub theme: Option<String>,

    /// Portfolio content file.
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the dark-mode preference file.
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,

    /// Player command line for background music, e.g. `["mpv", "--no-video"]`.
    #[serde(default)]
    pub music_command: Option<Vec<String>>,

    /// Music volume in percent (0-100).
    #[serde(default)]
    pub music_volume: Option<u8>,

    /// Whether the music loops.
    #[serde(default)]
    pub music_loop: Option<bool>,

    /// Carousel transition window in milliseconds.
    #[serde(default)]
    pub transition_ms: Option<u64>,

    /// Idle redraw interval in milliseconds.
    #[serde(default)]
    pub tick_ms: Option<u64>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Startup theme override. `None` uses the stored preference.
    pub theme: Option<ThemeMode>,
    /// Portfolio content file. `None` uses the built-in portfolio.
    pub content_path: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the preference file.
    pub preferences_path: PathBuf,
    /// Player command line. Empty disables music.
    pub music_command: Vec<String>,
    /// Music volume in percent, at most 100.
    pub music_volume: u8,
    /// Whether the music loops.
    pub music_loop: bool,
    /// Whether music is enabled at all.
    pub music_enabled: bool,
    /// Carousel transition window.
    pub transition: Duration,
    /// Idle redraw interval.
    pub tick: Duration,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: None,
            content_path: None,
            log_file_path: default_log_path(),
            preferences_path: default_preferences_path(),
            music_command: Vec::new(),
            music_volume: 40,
            music_loop: true,
            music_enabled: true,
            transition: crate::state::TRANSITION_DURATION,
            tick: Duration::from_millis(250),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Resolve default preference file path, next to the log file.
pub fn default_preferences_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("preferences.json")
    } else {
        PathBuf::from("folio-preferences.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/folio/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("FOLIO_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Parse a theme name, logging and discarding invalid values.
fn parse_theme(raw: &str, source: &str) -> Option<ThemeMode> {
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!(source, error = %e, "ignoring theme setting");
            None
        }
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `FOLIO_THEME`: Override startup theme ("light"/"dark")
/// - `FOLIO_CONTENT`: Override content file path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        if let Some(theme) = parse_theme(&theme, "FOLIO_THEME") {
            config.theme = Some(theme);
        }
    }

    if let Ok(content) = std::env::var("FOLIO_CONTENT") {
        config.content_path = Some(PathBuf::from(content));
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
/// Invalid theme names are ignored with a warning; the volume is capped at 100.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config
            .theme
            .as_deref()
            .and_then(|t| parse_theme(t, "config file")),
        content_path: config.content_path,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        preferences_path: config.preferences_path.unwrap_or(defaults.preferences_path),
        music_command: config.music_command.unwrap_or(defaults.music_command),
        music_volume: config
            .music_volume
            .map(|v| v.min(100))
            .unwrap_or(defaults.music_volume),
        music_loop: config.music_loop.unwrap_or(defaults.music_loop),
        music_enabled: defaults.music_enabled,
        transition: config
            .transition_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.transition),
        tick: config
            .tick_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(defaults.tick),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults, file, and env vars)
/// * `theme_override` - Theme from `--dark`/`--light`
/// * `content_override` - Content file from `--content`
/// * `music_disabled` - `--no-music` was passed
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<ThemeMode>,
    content_override: Option<PathBuf>,
    music_disabled: bool,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = Some(theme);
    }

    if let Some(content) = content_override {
        config.content_path = Some(content);
    }

    if music_disabled {
        config.music_enabled = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
