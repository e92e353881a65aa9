//! Error types for folio.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error wrapping every fatal failure
//!   - [`ContentError`] - Portfolio content could not be read, parsed, or validated
//!   - [`crate::config::ConfigError`] - Config file could not be read or parsed
//!   - [`crate::logging::LoggingError`] - Log file setup failed
//!   - [`crate::view::TuiError`] - Terminal setup or drawing failed
//!   - `std::io::Error` - Other terminal I/O failures
//!
//! # Recovery Strategy
//!
//! Only startup and terminal failures are fatal. Everything that can go wrong
//! while the portfolio is on screen (audio playback refused, a gallery image
//! missing, the preference file unwritable) is expected: it is logged and
//! swallowed where it happens and never reaches these types.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All module errors convert into `AppError` via `From`, so `main` can use
/// `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Portfolio content could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The TUI could not set up or draw to the terminal.
    #[error("TUI error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Terminal I/O error outside the TUI.
    ///
    /// Without a working terminal nothing can be shown; the caller restores
    /// the terminal and exits.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading portfolio content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The content file exists but could not be read.
    #[error("Failed to read content file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The content file is not valid portfolio TOML.
    #[error("Invalid content in {path}: {reason}")]
    ParseError {
        /// Path with invalid content.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// The content file was explicitly requested but does not exist.
    #[error("Content file not found: {0}")]
    NotFound(PathBuf),

    /// The carousel needs at least one project.
    #[error("Portfolio must contain at least one project")]
    NoProjects,
}
