//! Background music toggle.

use crate::audio::AudioHandle;
use tracing::debug;

/// Whether background music is playing.
///
/// Playback refusal leaves the toggle off, so the next toggle tries again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MusicState {
    playing: bool,
}

impl MusicState {
    /// Music off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether music is currently playing.
    pub fn is_playing(self) -> bool {
        self.playing
    }

    /// Start or stop playback. Returns the new playing state.
    pub fn toggle(&mut self, audio: &mut dyn AudioHandle) -> bool {
        if self.playing {
            audio.pause();
            self.playing = false;
        } else {
            match audio.play() {
                Ok(()) => self.playing = true,
                Err(e) => debug!(error = %e, "music playback refused"),
            }
        }
        self.playing
    }

    /// Follow the player while music is on. Returns `true` when the track
    /// stopped on its own and the state flipped to off.
    pub fn poll(&mut self, audio: &mut dyn AudioHandle) -> bool {
        if self.playing && !audio.poll() {
            debug!("music ended");
            self.playing = false;
            return true;
        }
        false
    }

    /// Stop playback if it is running.
    pub fn stop(&mut self, audio: &mut dyn AudioHandle) {
        if self.playing {
            audio.pause();
            self.playing = false;
        }
    }
}
