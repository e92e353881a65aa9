//! Experience section: one tab per position.
//!
//! Selection state is managed by AppState.selected_tab.

use super::constants::TAB_BAR_HEIGHT;
use super::helpers::{empty_line, section_block, section_inner};
use super::styles::Palette;
use crate::model::Experience;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

/// Render the Experience section.
///
/// # Behavior
/// - One tab per entry, labelled with the company
/// - Out-of-bounds selections are treated as no selection
/// - With no entries a placeholder line is shown
pub fn render_experience(
    frame: &mut Frame,
    area: Rect,
    experience: &[Experience],
    selected_tab: Option<usize>,
    palette: &Palette,
) {
    frame.render_widget(section_block("Experience", palette, true), area);
    let inner = section_inner(area);

    if experience.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing here yet.", palette.muted_text())),
            inner,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = experience
        .iter()
        .map(|e| Line::from(e.company.clone()))
        .collect();

    let validated_selection = selected_tab.filter(|&idx| idx < experience.len());

    let mut tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border()),
        )
        .style(palette.base());

    // Tabs always highlights something; only style it when selection is valid.
    if let Some(idx) = validated_selection {
        tabs = tabs
            .highlight_style(palette.heading().add_modifier(Modifier::REVERSED))
            .select(idx);
    }
    frame.render_widget(tabs, chunks[0]);

    let Some(entry) = validated_selection.and_then(|idx| experience.get(idx)) else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(entry.role.clone(), palette.heading()),
            Span::styled(format!(" @ {}", entry.company), palette.base()),
        ]),
        Line::from(Span::styled(entry.period.clone(), palette.muted_text())),
        empty_line(),
    ];
    lines.extend(
        entry
            .highlights
            .iter()
            .map(|h| Line::from(Span::styled(format!("  • {h}"), palette.base()))),
    );

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1],
    );
}
