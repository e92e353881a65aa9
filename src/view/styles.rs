//! Color schemes for light and dark mode.

use crate::state::ThemeMode;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors forced on, ignoring the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors forced off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Every color the view uses, resolved for one theme.
///
/// With colors disabled every entry is [`Color::Reset`] and emphasis falls
/// back to modifiers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default foreground.
    pub text: Color,
    /// Screen background.
    pub background: Color,
    /// Headings, focused borders, the active slide.
    pub accent: Color,
    /// Secondary text and unfocused borders.
    pub muted: Color,
    /// Key names in hints and help.
    pub key: Color,
    /// Error messages.
    pub error: Color,
    /// Contribution intensity levels 0 through 4.
    pub heat: [Color; 5],
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: ThemeMode, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self {
                text: Color::Reset,
                background: Color::Reset,
                accent: Color::Reset,
                muted: Color::Reset,
                key: Color::Reset,
                error: Color::Reset,
                heat: [Color::Reset; 5],
            };
        }

        match theme {
            ThemeMode::Light => Self {
                text: Color::Rgb(0x1f, 0x23, 0x28),
                background: Color::Rgb(0xfa, 0xfa, 0xf7),
                accent: Color::Rgb(0x6d, 0x28, 0xd9),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                key: Color::Rgb(0xb4, 0x53, 0x09),
                error: Color::Rgb(0xb9, 0x1c, 0x1c),
                heat: [
                    Color::Rgb(0xeb, 0xed, 0xf0),
                    Color::Rgb(0x9b, 0xe9, 0xa8),
                    Color::Rgb(0x40, 0xc4, 0x63),
                    Color::Rgb(0x30, 0xa1, 0x4e),
                    Color::Rgb(0x21, 0x6e, 0x39),
                ],
            },
            ThemeMode::Dark => Self {
                text: Color::Rgb(0xe5, 0xe7, 0xeb),
                background: Color::Rgb(0x11, 0x13, 0x18),
                accent: Color::Rgb(0xc4, 0xb5, 0xfd),
                muted: Color::Rgb(0x9c, 0xa3, 0xaf),
                key: Color::Rgb(0xfb, 0xbf, 0x24),
                error: Color::Rgb(0xf8, 0x71, 0x71),
                heat: [
                    Color::Rgb(0x16, 0x1b, 0x22),
                    Color::Rgb(0x0e, 0x44, 0x29),
                    Color::Rgb(0x00, 0x6d, 0x32),
                    Color::Rgb(0x26, 0xa6, 0x41),
                    Color::Rgb(0x39, 0xd3, 0x53),
                ],
            },
        }
    }

    /// Base style for body text.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    /// Section headers and titles.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Secondary text.
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Key names.
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.key).add_modifier(Modifier::BOLD)
    }

    /// Border for focused or current elements.
    pub fn focused_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Border for everything else.
    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Color for a contribution intensity level, saturating at 4.
    pub fn heat_color(&self, level: u8) -> Color {
        self.heat[usize::from(level.min(4))]
    }
}

// ===== Tests =====
