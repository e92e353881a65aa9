//! Keyboard bindings configuration.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with option to override via configuration.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether symbols such as `?` arrive with SHIFT,
    /// so a shifted non-letter falls back to its unshifted binding.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(c) if !c.is_alphabetic() && key.modifiers.contains(KeyModifiers::SHIFT) => {
                let unshifted = KeyEvent::new(key.code, key.modifiers - KeyModifiers::SHIFT);
                self.bindings.get(&unshifted).copied()
            }
            _ => None,
        }
    }

    /// Bind `key` to `action`, replacing any previous binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Section focus
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::NextSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::PrevSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE),
            KeyAction::PrevSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::NextSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::PrevSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::NextSection,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::PrevSection,
        );

        // Contextual navigation (carousel, experience tabs, gallery)
        bindings.insert(
            KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
            KeyAction::NavigatePrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            KeyAction::NavigateNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE),
            KeyAction::NavigatePrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            KeyAction::NavigateNext,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::NavigatePrev,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NavigateNext,
        );

        // Direct selection (carousel dots, tabs, gallery images)
        for n in 1..=9 {
            let digit = char::from_digit(n, 10).unwrap_or('1');
            bindings.insert(
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                KeyAction::SelectIndex(n as usize),
            );
        }

        // Toggles
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::ToggleDarkMode,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE),
            KeyAction::ToggleMusic,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            KeyAction::ToggleGallery,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE),
            KeyAction::ExportResume,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyAction::Close,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
