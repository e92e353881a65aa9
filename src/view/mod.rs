//! TUI rendering and terminal management (impure shell)

mod about;
pub mod constants;
mod contributions;
mod experience;
mod gallery;
mod help;
mod helpers;
mod hero;
mod layout;
pub mod projects;
mod skills;
pub mod styles;

pub use contributions::{intensity_level, CalendarGrid};
pub use layout::{calculate_layout, ScreenLayout};
pub use projects::{CarouselHit, CarouselLayout};
pub use styles::{ColorConfig, Palette};

use crate::audio::{AudioHandle, ClickSfx, NullAudio, SilentClick};
use crate::config::KeyBindings;
use crate::content::export_resume;
use crate::model::{KeyAction, Portfolio};
use crate::preferences::{save_theme, MemoryPreferenceStore, PreferenceStore};
use crate::state::{
    handle_carousel_action, handle_tab_action, AppState, FocusSection, FsImageProbe, ImageProbe,
    StatusMessage, ThemeMode, TRANSITION_DURATION,
};
use chrono::NaiveDate;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Idle wake-up interval when no transition is pending.
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// Settings the TUI starts with.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Initial color scheme.
    pub theme: ThemeMode,
    /// Carousel transition window.
    pub transition: Duration,
    /// Idle poll interval.
    pub tick: Duration,
    /// Whether to emit colors.
    pub colors: ColorConfig,
    /// Date the contribution calendar ends on.
    pub today: NaiveDate,
    /// Where the resume is exported to.
    pub download_dir: PathBuf,
    /// Key map.
    pub key_bindings: KeyBindings,
}

impl RunOptions {
    /// Defaults for `today`: light theme, standard timings, colors on.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            theme: ThemeMode::default(),
            transition: TRANSITION_DURATION,
            tick: DEFAULT_TICK,
            colors: ColorConfig::enabled(),
            today,
            download_dir: crate::content::default_download_dir(),
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Side-effecting services the UI talks to.
pub struct Collaborators {
    /// Background music player.
    pub audio: Box<dyn AudioHandle>,
    /// Toggle click sound.
    pub click: Box<dyn ClickSfx>,
    /// Theme persistence.
    pub preferences: Box<dyn PreferenceStore>,
    /// Gallery image check.
    pub probe: Box<dyn ImageProbe>,
}

impl Collaborators {
    /// No sound, in-memory preferences, images checked on disk.
    pub fn silent() -> Self {
        Self {
            audio: Box::new(NullAudio),
            click: Box::new(SilentClick),
            preferences: Box::new(MemoryPreferenceStore::new()),
            probe: Box::new(FsImageProbe),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    portfolio: Portfolio,
    key_bindings: KeyBindings,
    collaborators: Collaborators,
    colors: ColorConfig,
    today: NaiveDate,
    tick: Duration,
    download_dir: PathBuf,
    /// Last rendered carousel area (for dot/arrow click detection)
    last_projects_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(
        portfolio: Portfolio,
        options: RunOptions,
        collaborators: Collaborators,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            portfolio,
            options,
            collaborators,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps in `event::poll` until
    /// input arrives or the pending carousel completion is due.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = poll_timeout(self.app_state.next_deadline(), Instant::now(), self.tick);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse, Instant::now());
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        options: RunOptions,
        collaborators: Collaborators,
    ) -> Self {
        let app_state = AppState::with_transition(&portfolio, options.theme, options.transition);

        Self {
            terminal,
            app_state,
            portfolio,
            key_bindings: options.key_bindings,
            collaborators,
            colors: options.colors,
            today: options.today,
            tick: options.tick,
            download_dir: options.download_dir,
            last_projects_area: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Any bound key dismisses the previous status message
        self.app_state.status = None;

        if self.app_state.help_visible {
            return self.handle_help_key(action);
        }
        if self.app_state.gallery.is_visible() {
            return self.handle_gallery_key(action);
        }

        match action {
            KeyAction::Quit => return true,

            KeyAction::NextSection => self.app_state.next_section(),
            KeyAction::PrevSection => self.app_state.prev_section(),

            KeyAction::NavigatePrev | KeyAction::NavigateNext | KeyAction::SelectIndex(_) => {
                self.navigate(action, now)
            }

            KeyAction::ToggleDarkMode => self.toggle_theme(),
            KeyAction::ToggleMusic => self.toggle_music(),
            KeyAction::ToggleGallery => {
                self.app_state
                    .gallery
                    .open(self.collaborators.probe.as_ref());
            }
            KeyAction::ExportResume => self.export_resume(),
            KeyAction::Help => self.app_state.toggle_help(),

            // Nothing to close
            KeyAction::Close => {}
        }

        false
    }

    /// Keys while the help overlay is open: scroll, close, or quit.
    fn handle_help_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Help | KeyAction::Close => self.app_state.toggle_help(),
            KeyAction::PrevSection => {
                self.app_state.help_scroll_offset =
                    self.app_state.help_scroll_offset.saturating_sub(1);
            }
            KeyAction::NextSection => {
                let max_scroll = help::help_line_count().saturating_sub(self.help_visible_rows());
                self.app_state.help_scroll_offset = self
                    .app_state
                    .help_scroll_offset
                    .saturating_add(1)
                    .min(max_scroll);
            }
            _ => {}
        }
        false
    }

    /// Rows of help content visible inside the popup borders.
    fn help_visible_rows(&self) -> u16 {
        let height = self.terminal.size().map(|size| size.height).unwrap_or(24);
        (height * constants::HELP_POPUP_HEIGHT_PERCENT / 100).saturating_sub(2)
    }

    /// Keys while the gallery is open; everything but browsing is swallowed.
    fn handle_gallery_key(&mut self, action: KeyAction) -> bool {
        let gallery = &mut self.app_state.gallery;
        match action {
            KeyAction::Quit => return true,
            KeyAction::Close | KeyAction::ToggleGallery => gallery.close(),
            KeyAction::NavigateNext => gallery.select_next(),
            KeyAction::NavigatePrev => gallery.select_prev(),
            KeyAction::SelectIndex(n) => gallery.select(n.saturating_sub(1)),
            _ => {}
        }
        false
    }

    /// Route a navigation key to the focused section.
    fn navigate(&mut self, action: KeyAction, now: Instant) {
        match self.app_state.focus {
            FocusSection::Experience => {
                self.app_state = handle_tab_action(self.app_state.clone(), action);
            }
            FocusSection::Projects => {
                handle_carousel_action(&mut self.app_state, action, now);
            }
            _ => {}
        }
    }

    fn toggle_theme(&mut self) {
        let theme = self.app_state.toggle_theme();
        save_theme(self.collaborators.preferences.as_mut(), theme);
        self.collaborators.click.click();
        info!(%theme, "theme toggled");
    }

    fn toggle_music(&mut self) {
        let was_playing = self.app_state.music.is_playing();
        let playing = self
            .app_state
            .music
            .toggle(self.collaborators.audio.as_mut());
        self.collaborators.click.click();

        self.app_state.status = Some(match (was_playing, playing) {
            (_, true) => StatusMessage::info("Music on"),
            (true, false) => StatusMessage::info("Music off"),
            (false, false) => StatusMessage::error("Music unavailable"),
        });
    }

    fn export_resume(&mut self) {
        let resume = self.portfolio.resume.as_deref();
        self.app_state.status = Some(match export_resume(resume, &self.download_dir) {
            Ok(path) => StatusMessage::info(format!("Resume saved to {}", path.display())),
            Err(e) => {
                warn!(error = %e, "resume export failed");
                StatusMessage::error(e.to_string())
            }
        });
    }

    /// Handle a single mouse event
    ///
    /// Left clicks on the carousel arrows and dots navigate the carousel.
    /// Clicks under an open overlay are ignored.
    fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || self.app_state.overlay_open() {
            return;
        }

        let Some(area) = self.last_projects_area else {
            return;
        };

        let carousel = &mut self.app_state.carousel;
        let layout = CarouselLayout::new(area, carousel.len());
        match layout.hit_test(mouse.column, mouse.row) {
            Some(CarouselHit::Prev) => {
                carousel.go_prev(now);
            }
            Some(CarouselHit::Next) => {
                carousel.go_next(now);
            }
            Some(CarouselHit::Dot(index)) => {
                carousel.go_to(index, now);
            }
            None => {}
        }
    }

    /// Render the current frame
    ///
    /// Records the carousel area for mouse hit testing before drawing.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_projects_area = (self.app_state.focus == FocusSection::Projects)
            .then(|| projects::carousel_area(layout::calculate_layout(frame_area).body));

        let state = &self.app_state;
        let portfolio = &self.portfolio;
        let today = self.today;
        let colors = self.colors;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, portfolio, today, colors);
        })?;

        Ok(())
    }

    /// Run due timers and follow the music player. Returns `true` when a
    /// redraw is needed.
    fn tick(&mut self, now: Instant) -> bool {
        let timers = self.app_state.tick(now);
        let music_ended = self
            .app_state
            .music
            .poll(self.collaborators.audio.as_mut());
        if music_ended {
            self.app_state.status = Some(StatusMessage::info("Music ended"));
        }
        timers || music_ended
    }

    /// Cancel timers and stop the music before the terminal is torn down.
    fn shutdown(&mut self) {
        self.app_state.dispose();
        self.app_state
            .music
            .stop(self.collaborators.audio.as_mut());
    }
}

/// How long to wait for input: until the next deadline, at most `tick`.
pub fn poll_timeout(deadline: Option<Instant>, now: Instant, tick: Duration) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(tick),
        None => tick,
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        portfolio: Portfolio,
        options: RunOptions,
        collaborators: Collaborators,
    ) -> Self {
        Self::with_terminal(terminal, portfolio, options, collaborators)
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn app_state_mut(&mut self) -> &mut AppState {
        &mut self.app_state
    }

    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent, now: Instant) {
        self.handle_mouse(mouse, now)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.tick(now)
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn shutdown_test(&mut self) {
        self.shutdown()
    }

    pub(crate) fn last_projects_area(&self) -> Option<Rect> {
        self.last_projects_area
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    portfolio: Portfolio,
    options: RunOptions,
    collaborators: Collaborators,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(portfolio, options, collaborators)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
