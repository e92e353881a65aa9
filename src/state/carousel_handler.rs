//! Carousel keyboard/mouse action handler.
//!
//! Maps navigation intents onto the carousel controller. Only operates when
//! focus is on the Projects section.

use crate::model::KeyAction;
use crate::state::{AppState, FocusSection};
use std::time::Instant;

/// Handle a carousel navigation action.
///
/// `SelectIndex(n)` is the dot indicator surface and is 1-indexed.
/// Returns `true` when a transition started.
pub fn handle_carousel_action(state: &mut AppState, action: KeyAction, now: Instant) -> bool {
    if state.focus != FocusSection::Projects {
        return false;
    }

    let started = match action {
        KeyAction::NavigateNext => state.carousel.go_next(now),
        KeyAction::NavigatePrev => state.carousel.go_prev(now),
        KeyAction::SelectIndex(n) if (1..=state.carousel.len()).contains(&n) => {
            state.carousel.go_to(n - 1, now)
        }
        _ => None,
    };

    started.is_some()
}
