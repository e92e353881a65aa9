//! Light/dark mode.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color scheme for the whole UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Light background. Used when no preference is stored.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

/// A theme name that is neither "light" nor "dark".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme '{0}', expected 'light' or 'dark'")]
pub struct InvalidThemeMode(pub String);

impl ThemeMode {
    /// Map the persisted boolean onto a mode.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// The value persisted under the dark-mode preference key.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle, describing what pressing it does.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = InvalidThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(InvalidThemeMode(s.to_string())),
        }
    }
}
