//! Click sound effect played on toggles.

use std::io::Write;

/// A short UI click.
pub trait ClickSfx {
    /// Play the click. Failures are the implementation's problem; callers
    /// never see them.
    fn click(&mut self);
}

/// Rings the terminal bell.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl ClickSfx for TerminalBell {
    fn click(&mut self) {
        let mut stdout = std::io::stdout();
        // A terminal with the bell disabled or a closed stdout is fine.
        if stdout.write_all(b"\x07").and_then(|()| stdout.flush()).is_err() {
            tracing::trace!("terminal bell unavailable");
        }
    }
}

/// Plays nothing. Used with `--no-music` and in tests.
#[derive(Debug, Default)]
pub struct SilentClick;

impl ClickSfx for SilentClick {
    fn click(&mut self) {}
}
