//! Skills grid: one column per category.

use super::helpers::{section_block, section_inner, truncate_to_width};
use super::styles::Palette;
use crate::model::SkillGroup;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Lines for one category column, each item fit to `width` cells.
fn group_lines(group: &SkillGroup, width: usize, palette: &Palette) -> Vec<Line<'static>> {
    group
        .skills
        .iter()
        .map(|skill| {
            Line::from(Span::styled(
                truncate_to_width(&format!("• {skill}"), width),
                palette.base(),
            ))
        })
        .collect()
}

/// Render the Skills section.
pub fn render_skills(frame: &mut Frame, area: Rect, skills: &[SkillGroup], palette: &Palette) {
    frame.render_widget(section_block("Skills", palette, true), area);
    let inner = section_inner(area);

    if skills.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing here yet.", palette.muted_text())),
            inner,
        );
        return;
    }

    let count = u32::try_from(skills.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(skills.iter().map(|_| Constraint::Ratio(1, count)))
        .split(inner);

    for (group, column) in skills.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .title(Span::styled(
                truncate_to_width(&group.category, usize::from(column.width.saturating_sub(2))),
                palette.heading(),
            ));
        let width = usize::from(block.inner(*column).width);
        frame.render_widget(
            Paragraph::new(group_lines(group, width, palette)).block(block),
            *column,
        );
    }
}
