//! Whole-screen rendering checks through the harness.

use crate::state::FocusSection;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn nav_line(text: &str) -> String {
    text.lines()
        .find(|line| line.contains("Contributions") && line.contains("d: "))
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

#[test]
fn nav_bar_lists_sections_and_theme_toggle() {
    let mut harness = AcceptanceTestHarness::builtin().expect("harness builds");

    let text = harness.render_to_string();

    insta::assert_snapshot!(
        nav_line(&text),
        @"About   Experience   Skills   Projects   Contributions                       d: Switch to dark mode"
    );
}

#[test]
fn every_section_renders_in_small_terminal() {
    let mut harness = crate::test_harness::AcceptanceTestHarness::new(
        crate::model::Portfolio::builtin(crate::test_harness::fixture_today()),
        crate::view::Collaborators::silent(),
        40,
        12,
    )
    .expect("harness builds");

    for _ in FocusSection::ALL {
        let text = harness.render_to_string();
        assert!(!text.is_empty(), "{:?} rendered nothing", harness.state().focus);
        harness.send_key(KeyCode::Tab);
    }
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut harness = crate::test_harness::AcceptanceTestHarness::new(
        crate::model::Portfolio::builtin(crate::test_harness::fixture_today()),
        crate::view::Collaborators::silent(),
        3,
        2,
    )
    .expect("harness builds");
    harness.state_mut().focus = FocusSection::Projects;
    harness.send_key(KeyCode::Char('?'));

    let _ = harness.render_to_string();
    harness.click_at(1, 1);
}

#[test]
fn experience_tab_switch_changes_body() {
    let mut harness = AcceptanceTestHarness::builtin().expect("harness builds");
    harness.state_mut().focus = FocusSection::Experience;
    let first = harness.render_to_string();

    harness.send_key(KeyCode::Char('2'));
    let second = harness.render_to_string();

    assert_eq!(harness.state().selected_tab, Some(1));
    assert_ne!(first, second);
}
