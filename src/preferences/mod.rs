//! Persisted user preferences (impure shell).
//!
//! The only preference is dark mode, stored as a boolean under
//! [`DARK_MODE_KEY`] in a small JSON object. It is read once at startup and
//! written on every change. A missing or corrupt file reads as "no
//! preference"; write failures are logged and otherwise ignored.

use crate::state::ThemeMode;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Key the dark-mode flag is stored under.
pub const DARK_MODE_KEY: &str = "portfolio-dark-mode";

/// Errors writing preferences.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// The preference file or its directory could not be written.
    #[error("Failed to write preferences to {path:?}: {source}")]
    Write {
        /// File that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The preference map could not be serialized.
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Boolean key/value storage.
pub trait PreferenceStore {
    /// Read a flag. `None` when unset or unreadable.
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Write a flag.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PreferenceError>;
}

/// Read the stored theme, defaulting to light.
pub fn load_theme(store: &dyn PreferenceStore) -> ThemeMode {
    store
        .get_bool(DARK_MODE_KEY)
        .map(ThemeMode::from_dark_flag)
        .unwrap_or_default()
}

/// Persist `theme`. Failures are logged and swallowed.
pub fn save_theme(store: &mut dyn PreferenceStore, theme: ThemeMode) {
    match store.set_bool(DARK_MODE_KEY, theme.is_dark()) {
        Ok(()) => debug!(%theme, "theme preference saved"),
        Err(e) => warn!(error = %e, "could not persist theme preference"),
    }
}

// ===== JsonPreferenceStore =====

/// Preferences stored as a JSON object in a file.
///
/// Stored values are strings ("true"/"false"); unknown keys are preserved
/// on write.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Store backed by `path`. Nothing is read until a key is requested.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Map<String, Value> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!(path = ?self.path, error = %e, "no preference file");
                return Map::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(path = ?self.path, "ignoring malformed preference file");
                Map::new()
            }
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        match self.read_map().get(key)? {
            Value::String(s) => Some(s == "true"),
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), Value::String(value.to_string()));
        let contents = serde_json::to_string_pretty(&Value::Object(map))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, contents).map_err(|source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

// ===== MemoryPreferenceStore =====

/// In-memory store, used when persistence is unwanted (tests, demos).
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).copied()
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
