//! Acceptance Test Harness for TUI testing
//!
//! Wraps TuiApp<TestBackend> with convenient methods for simulating user
//! interactions. Time is virtual: the harness owns a clock that only moves
//! when a test calls [`AcceptanceTestHarness::advance`].

use crate::model::Portfolio;
use crate::state::AppState;
use crate::view::{Collaborators, ColorConfig, RunOptions, TuiApp, TuiError};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Date every harness portfolio is rendered against.
pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    now: Instant,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Built-in portfolio, silent collaborators, 100x30 terminal.
    pub fn builtin() -> Result<Self, TuiError> {
        Self::with_collaborators(Collaborators::silent())
    }

    /// Built-in portfolio with custom collaborators.
    pub fn with_collaborators(collaborators: Collaborators) -> Result<Self, TuiError> {
        Self::new(Portfolio::builtin(fixture_today()), collaborators, 100, 30)
    }

    /// Fully specified harness.
    pub fn new(
        portfolio: Portfolio,
        collaborators: Collaborators,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let options = RunOptions {
            colors: ColorConfig::disabled(),
            download_dir: std::env::temp_dir().join("folio_test_harness_downloads"),
            ..RunOptions::new(fixture_today())
        };

        Ok(Self {
            app: TuiApp::new_for_test(terminal, portfolio, options, collaborators),
            now: Instant::now(),
            running: true,
        })
    }

    /// Send a single key event
    ///
    /// Returns `true` if the app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods), self.now);
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Move the virtual clock forward, run due timers and poll the player.
    ///
    /// Returns `true` when state changed.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.app.tick_test(self.now)
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Mutable state, for setting up scenarios directly.
    pub fn state_mut(&mut self) -> &mut AppState {
        self.app.app_state_mut()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame and return the buffer as text.
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Carousel area from the last render, if Projects was focused.
    pub fn projects_area(&mut self) -> Option<Rect> {
        self.app.render_test().ok()?;
        self.app.last_projects_area()
    }

    /// Send a left click at the specified coordinates
    ///
    /// Renders first so hit-test areas are current.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return;
        }

        let _ = self.app.render_test();

        let mouse_event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(mouse_event, self.now);
    }

    /// Run the exit path: dispose timers, stop music.
    pub fn shutdown(&mut self) {
        self.app.shutdown_test();
        self.running = false;
    }
}
