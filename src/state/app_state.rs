//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.

use crate::model::Portfolio;
use crate::state::{CarouselController, GalleryState, MusicState, ThemeMode};
use std::time::{Duration, Instant};

// ===== FocusSection =====

/// Which section fills the body and receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FocusSection {
    /// Introduction and social links.
    #[default]
    About,
    /// Career tabs.
    Experience,
    /// Skills grid.
    Skills,
    /// Project carousel.
    Projects,
    /// Contribution calendar.
    Contributions,
}

impl FocusSection {
    /// All sections in navigation order.
    pub const ALL: [FocusSection; 5] = [
        FocusSection::About,
        FocusSection::Experience,
        FocusSection::Skills,
        FocusSection::Projects,
        FocusSection::Contributions,
    ];

    /// Section title as shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contributions => "Contributions",
        }
    }

    /// Position in [`FocusSection::ALL`].
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// The following section, wrapping.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// The preceding section, wrapping.
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ===== StatusMessage =====

/// One-line feedback shown in the status bar until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Text to display.
    pub text: String,
    /// Whether to style the message as an error.
    pub is_error: bool,
}

impl StatusMessage {
    /// Informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Focus**: About → Experience → Skills → Projects → Contributions (wrapping)
/// - **Carousel**: Resting ⇄ Transitioning, see [`CarouselController`]
/// - **Overlays**: help and gallery; while one is open it captures input
/// - **Theme**: Light ⇄ Dark
/// - **Music**: Off ⇄ On (stays Off when playback is refused)
#[derive(Debug, Clone)]
pub struct AppState {
    /// Section that fills the body.
    pub focus: FocusSection,

    /// Current color scheme.
    pub theme: ThemeMode,

    /// Background music toggle.
    pub music: MusicState,

    /// Project carousel controller.
    pub carousel: CarouselController,

    /// Selected experience tab (0-based). `None` when there is no experience.
    pub selected_tab: Option<usize>,

    /// Number of experience tabs.
    tab_count: usize,

    /// Cat gallery modal.
    pub gallery: GalleryState,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Help overlay scroll offset.
    pub help_scroll_offset: u16,

    /// Transient status bar message.
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Create state for `portfolio` with the default transition window.
    pub fn new(portfolio: &Portfolio, theme: ThemeMode) -> Self {
        Self::with_transition(portfolio, theme, crate::state::carousel::TRANSITION_DURATION)
    }

    /// Create state with a custom carousel transition window.
    pub fn with_transition(portfolio: &Portfolio, theme: ThemeMode, transition: Duration) -> Self {
        let tab_count = portfolio.experience.len();
        Self {
            focus: FocusSection::default(),
            theme,
            music: MusicState::new(),
            carousel: CarouselController::with_duration(portfolio.project_count(), transition),
            selected_tab: if tab_count > 0 { Some(0) } else { None },
            tab_count,
            gallery: GalleryState::new(portfolio.cats.clone()),
            help_visible: false,
            help_scroll_offset: 0,
            status: None,
        }
    }

    /// Number of experience tabs.
    pub fn tab_count(&self) -> usize {
        self.tab_count
    }

    /// Focus the next section.
    pub fn next_section(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the previous section.
    pub fn prev_section(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Select the next experience tab, wrapping.
    pub fn next_tab(&mut self) {
        if let Some(current) = self.selected_tab {
            self.selected_tab = Some((current + 1) % self.tab_count);
        }
    }

    /// Select the previous experience tab, wrapping.
    pub fn prev_tab(&mut self) {
        if let Some(current) = self.selected_tab {
            self.selected_tab = Some((current + self.tab_count - 1) % self.tab_count);
        }
    }

    /// Select an experience tab by 1-indexed number; out-of-range is ignored.
    pub fn select_tab(&mut self, number: usize) {
        if (1..=self.tab_count).contains(&number) {
            self.selected_tab = Some(number - 1);
        }
    }

    /// Flip the theme and return the new mode.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.theme
    }

    /// Toggle the help overlay, resetting its scroll when it closes.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        if !self.help_visible {
            self.help_scroll_offset = 0;
        }
    }

    /// Whether an overlay is capturing input.
    pub fn overlay_open(&self) -> bool {
        self.help_visible || self.gallery.is_visible()
    }

    /// Drive time-based state. Returns `true` when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.carousel.tick(now)
    }

    /// Earliest pending deadline, used to size the event poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousel.next_deadline()
    }

    /// Tear down timers before the view goes away.
    pub fn dispose(&mut self) {
        self.carousel.dispose();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
