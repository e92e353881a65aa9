//! Audio playback (impure shell).
//!
//! Background music is played by an external player process; the click
//! sound effect is the terminal bell. Playback failures are expected
//! (no player installed, file missing, terminal bell disabled) and callers
//! ignore them.

pub mod sfx;

pub use sfx::{ClickSfx, SilentClick, TerminalBell};

use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use thiserror::Error;
use tracing::debug;

/// Environment variable carrying the volume (0.0-1.0) to the player process.
pub const VOLUME_ENV: &str = "FOLIO_AUDIO_VOLUME";

/// Environment variable carrying the loop flag ("1"/"0") to the player process.
pub const LOOP_ENV: &str = "FOLIO_AUDIO_LOOP";

/// Why playback could not start.
#[derive(Debug, Error)]
pub enum AudioError {
    /// No player or no music file is configured.
    #[error("Audio playback is not configured")]
    Unavailable,

    /// The player process could not be spawned.
    #[error("Failed to start audio player '{program}': {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A playback handle for a single looping track.
pub trait AudioHandle {
    /// Start playback. Platform refusal is reported, never panics.
    fn play(&mut self) -> Result<(), AudioError>;

    /// Stop playback. Pausing while stopped is a no-op.
    fn pause(&mut self);

    /// Whether the track restarts when it ends.
    fn set_loop(&mut self, looping: bool);

    /// Playback volume, clamped to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);

    /// Keep a started track going, restarting it if it ended and looping
    /// is on. Returns `false` once playback has stopped on its own.
    fn poll(&mut self) -> bool {
        true
    }
}

// ===== NullAudio =====

/// Handle used when music is disabled. Every `play` fails.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioHandle for NullAudio {
    fn play(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    fn pause(&mut self) {}

    fn set_loop(&mut self, _looping: bool) {}

    fn set_volume(&mut self, _volume: f32) {}

    fn poll(&mut self) -> bool {
        false
    }
}

// ===== CommandPlayer =====

/// Plays a file by spawning `program args... file`.
///
/// Volume and loop settings reach the player through [`VOLUME_ENV`] and
/// [`LOOP_ENV`], so wrapper scripts can honour them.
#[derive(Debug)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
    file: PathBuf,
    looping: bool,
    volume: f32,
    child: Option<Child>,
}

impl CommandPlayer {
    /// Build a player from a command line (`["mpv", "--no-video"]`) and a file.
    ///
    /// Returns `None` when `command` is empty.
    pub fn new(command: &[String], file: PathBuf) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            file,
            looping: true,
            volume: 1.0,
            child: None,
        })
    }

    /// Current volume.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current loop setting.
    pub fn looping(&self) -> bool {
        self.looping
    }

    /// Whether a player process is running.
    pub fn is_running(&mut self) -> bool {
        match self.child.as_mut().map(Child::try_wait) {
            Some(Ok(None)) => true,
            Some(_) => {
                self.child = None;
                false
            }
            None => false,
        }
    }
}

impl AudioHandle for CommandPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        if self.is_running() {
            return Ok(());
        }
        if !self.file.exists() {
            debug!(file = ?self.file, "music file missing");
            return Err(AudioError::Unavailable);
        }

        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(&self.file)
            .env(VOLUME_ENV, format!("{:.2}", self.volume))
            .env(LOOP_ENV, if self.looping { "1" } else { "0" })
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AudioError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(pid = child.id(), "audio player started");
        self.child = Some(child);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Already-exited children make kill fail; nothing to do then.
            let _ = child.kill();
            let _ = child.wait();
            debug!("audio player stopped");
        }
    }

    fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn poll(&mut self) -> bool {
        if self.is_running() {
            return true;
        }
        if !self.looping {
            debug!("track finished");
            return false;
        }
        match self.play() {
            Ok(()) => {
                debug!("track restarted");
                true
            }
            Err(e) => {
                debug!(error = %e, "could not restart track");
                false
            }
        }
    }
}

impl Drop for CommandPlayer {
    fn drop(&mut self) {
        self.pause();
    }
}
