//! Experience tab keyboard action handler.
//!
//! Pure function that transforms AppState in response to navigation actions.
//! Only operates when focus is on the Experience section.

use crate::model::KeyAction;
use crate::state::{AppState, FocusSection};

/// Handle a tab navigation keyboard action.
///
/// # Arguments
/// * `state` - Current application state to transform
/// * `action` - The navigation action to handle
///
/// Returns a new AppState with the tab action applied. Non-navigation
/// actions and other focused sections leave the state unchanged.
pub fn handle_tab_action(mut state: AppState, action: KeyAction) -> AppState {
    if state.focus != FocusSection::Experience {
        return state;
    }

    match action {
        KeyAction::NavigateNext => state.next_tab(),
        KeyAction::NavigatePrev => state.prev_tab(),
        KeyAction::SelectIndex(n) => state.select_tab(n),
        _ => {}
    }

    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "tab_handler_tests.rs"]
mod tests;
