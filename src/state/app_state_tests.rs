//! Tests for AppState.

use super::*;
use chrono::NaiveDate;

fn portfolio() -> Portfolio {
    Portfolio::builtin(NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date"))
}

#[test]
fn new_state_focuses_about_with_first_tab() {
    let state = AppState::new(&portfolio(), ThemeMode::Light);

    assert_eq!(state.focus, FocusSection::About);
    assert_eq!(state.selected_tab, Some(0));
    assert_eq!(state.tab_count(), 3);
    assert_eq!(state.carousel.len(), 4);
    assert!(!state.overlay_open());
}

#[test]
fn no_experience_means_no_tab_selection() {
    let mut portfolio = portfolio();
    portfolio.experience.clear();
    let mut state = AppState::new(&portfolio, ThemeMode::Light);

    assert_eq!(state.selected_tab, None);
    state.next_tab();
    state.prev_tab();
    state.select_tab(1);
    assert_eq!(state.selected_tab, None);
}

#[test]
fn sections_cycle_in_both_directions() {
    let mut state = AppState::new(&portfolio(), ThemeMode::Light);

    state.prev_section();
    assert_eq!(state.focus, FocusSection::Contributions);

    state.next_section();
    state.next_section();
    assert_eq!(state.focus, FocusSection::Experience);
}

#[test]
fn every_section_round_trips_through_next_and_prev() {
    for section in FocusSection::ALL {
        assert_eq!(section.next().prev(), section);
    }
}

#[test]
fn tabs_wrap() {
    let mut state = AppState::new(&portfolio(), ThemeMode::Light);

    state.prev_tab();
    assert_eq!(state.selected_tab, Some(2));

    state.next_tab();
    assert_eq!(state.selected_tab, Some(0));
}

#[test]
fn select_tab_is_one_indexed_and_ignores_out_of_range() {
    let mut state = AppState::new(&portfolio(), ThemeMode::Light);

    state.select_tab(3);
    assert_eq!(state.selected_tab, Some(2));

    state.select_tab(0);
    state.select_tab(4);
    assert_eq!(state.selected_tab, Some(2));
}

#[test]
fn toggle_theme_flips_and_returns_mode() {
    let mut state = AppState::new(&portfolio(), ThemeMode::Dark);

    assert_eq!(state.toggle_theme(), ThemeMode::Light);
    assert_eq!(state.theme, ThemeMode::Light);
}

#[test]
fn closing_help_resets_scroll() {
    let mut state = AppState::new(&portfolio(), ThemeMode::Light);
    state.toggle_help();
    state.help_scroll_offset = 7;

    state.toggle_help();

    assert!(!state.help_visible);
    assert_eq!(state.help_scroll_offset, 0);
}

#[test]
fn tick_settles_carousel_and_dispose_cancels() {
    let mut state = AppState::with_transition(
        &portfolio(),
        ThemeMode::Light,
        Duration::from_millis(100),
    );
    let now = Instant::now();

    state.carousel.go_next(now);
    assert_eq!(state.next_deadline(), Some(now + Duration::from_millis(100)));
    assert!(state.tick(now + Duration::from_millis(100)));
    assert_eq!(state.next_deadline(), None);

    state.carousel.go_next(now);
    state.dispose();
    assert_eq!(state.next_deadline(), None);
}
