//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut table: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Sections",
        &[
            ("Tab/j/↓", "Next section"),
            ("Shift+Tab/k/↑", "Previous section"),
        ],
    ),
    (
        "Projects & Experience",
        &[
            ("h/←/[", "Previous project or position"),
            ("l/→/]", "Next project or position"),
            ("1-9", "Jump to project or position"),
            ("Click ‹ › ●", "Carousel arrows and dots"),
        ],
    ),
    (
        "Extras",
        &[
            ("d", "Toggle dark mode"),
            ("m", "Toggle background music"),
            ("c", "Open the cat gallery"),
            ("r", "Download resume"),
        ],
    ),
    (
        "Application",
        &[
            ("?", "Toggle this help"),
            ("Esc", "Close overlay"),
            ("q/Ctrl+C", "Quit"),
        ],
    ),
];

/// Number of lines in the help content, for scroll clamping.
pub fn help_line_count() -> u16 {
    let lines: usize = SHORTCUTS.iter().map(|(_, keys)| keys.len() + 2).sum();
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// Render the help overlay centered on the screen.
///
/// The scroll_offset parameter controls which line is shown at the top.
pub fn render_help_overlay(frame: &mut Frame, scroll_offset: u16, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(palette))
        .block(
            Block::default()
                .title(Span::styled(" Keyboard Shortcuts ", palette.heading()))
                .borders(Borders::ALL)
                .border_style(palette.focused_border()),
        )
        .style(palette.base())
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left)
        .scroll((scroll_offset, 0));

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1.min(popup_area.height),
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        palette.muted_text().add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (category, keys) in SHORTCUTS {
        lines.push(Line::from(Span::styled(*category, palette.heading())));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), palette.key_style()),
                Span::styled(*description, palette.base()),
            ]));
        }
        lines.push(empty_line());
    }
    lines
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
