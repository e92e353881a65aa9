//! Screen layout rendering.
//!
//! Pure layout logic: the hero banner on top, the section navigation bar,
//! the focused section filling the body, and the status bar at the bottom.
//! Overlays (gallery, help) are drawn last.

use super::constants::{HERO_HEIGHT, NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use super::helpers::truncate_to_width;
use super::styles::{ColorConfig, Palette};
use super::{about, contributions, experience, gallery, help, hero, projects, skills};
use crate::model::Portfolio;
use crate::state::{AppState, FocusSection};
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Hero banner.
    pub hero: Rect,
    /// Section navigation bar.
    pub nav: Rect,
    /// Focused section.
    pub body: Rect,
    /// Status bar.
    pub status: Rect,
}

/// Split `area` into the screen regions.
pub fn calculate_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT),
            Constraint::Length(NAV_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    ScreenLayout {
        hero: chunks[0],
        nav: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Render the whole screen.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    portfolio: &Portfolio,
    today: NaiveDate,
    colors: ColorConfig,
) {
    let palette = Palette::for_theme(state.theme, colors);
    let layout = calculate_layout(frame.area());

    // Paint the theme background everywhere first.
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    hero::render_hero(
        frame,
        layout.hero,
        &portfolio.profile,
        &portfolio.socials,
        &palette,
    );
    render_nav_bar(frame, layout.nav, state, &palette);

    match state.focus {
        FocusSection::About => about::render_about(
            frame,
            layout.body,
            &portfolio.profile,
            &portfolio.socials,
            &palette,
        ),
        FocusSection::Experience => experience::render_experience(
            frame,
            layout.body,
            &portfolio.experience,
            state.selected_tab,
            &palette,
        ),
        FocusSection::Skills => {
            skills::render_skills(frame, layout.body, &portfolio.skills, &palette)
        }
        FocusSection::Projects => projects::render_projects(
            frame,
            layout.body,
            &portfolio.projects,
            &state.carousel,
            &palette,
        ),
        FocusSection::Contributions => contributions::render_contributions(
            frame,
            layout.body,
            &portfolio.contributions,
            today,
            &palette,
        ),
    }

    render_status_bar(frame, layout.status, state, &palette);

    if state.gallery.is_visible() {
        gallery::render_gallery(frame, &state.gallery, &palette);
    }
    if state.help_visible {
        help::render_help_overlay(frame, state.help_scroll_offset, &palette);
    }
}

/// Section titles with the focused one highlighted, plus the theme toggle hint.
fn render_nav_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let mut spans = Vec::new();
    for section in FocusSection::ALL {
        let style = if section == state.focus {
            palette.heading().add_modifier(Modifier::REVERSED)
        } else {
            palette.muted_text()
        };
        spans.push(Span::styled(format!(" {} ", section.title()), style));
        spans.push(Span::raw(" "));
    }

    let toggle = format!("d: {}", state.theme.toggle_label());
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let padding = usize::from(area.width).saturating_sub(used + toggle.width());
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(toggle, palette.muted_text()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base()), area);
}

/// Keyboard hints for the focused section.
pub fn build_keyboard_hints(focus: FocusSection) -> &'static str {
    match focus {
        FocusSection::Projects => {
            "←/→ slide · 1-9 jump · Tab section · m music · c cats · r resume · ? help · q quit"
        }
        FocusSection::Experience => {
            "←/→ position · 1-9 jump · Tab section · m music · c cats · r resume · ? help · q quit"
        }
        _ => "Tab section · d theme · m music · c cats · r resume · ? help · q quit",
    }
}

/// Status line: the pending status message, or hints, with a music marker.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let music = if state.music.is_playing() {
        " ♪ "
    } else {
        ""
    };
    let width = usize::from(area.width).saturating_sub(music.width());

    let (text, style) = match &state.status {
        Some(status) if status.is_error => (
            status.text.as_str(),
            palette.base().fg(palette.error),
        ),
        Some(status) => (status.text.as_str(), palette.heading()),
        None => (build_keyboard_hints(state.focus), palette.muted_text()),
    };

    let line = Line::from(vec![
        Span::styled(music, palette.key_style()),
        Span::styled(truncate_to_width(text, width), style),
    ]);
    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
