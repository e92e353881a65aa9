//! Hero banner: name, title, tagline, and social links.

use super::helpers::{section_inner, truncate_to_width};
use super::styles::Palette;
use crate::model::{Profile, SocialLink};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the hero banner into `area`.
pub fn render_hero(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    socials: &[SocialLink],
    palette: &Palette,
) {
    let width = usize::from(section_inner(area).width);

    let mut headline = vec![
        Span::styled(
            profile.name.clone(),
            palette.heading().add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(format!("  {}", profile.title), palette.base()),
    ];
    if !profile.tagline.is_empty() {
        headline.push(Span::styled(
            format!("  ·  {}", profile.tagline),
            palette.muted_text(),
        ));
    }

    let links = socials
        .iter()
        .map(|link| format!("{} {}", link.label, link.url))
        .collect::<Vec<_>>()
        .join("   ");

    let lines = vec![
        Line::from(headline),
        Line::from(Span::styled(
            truncate_to_width(&links, width),
            palette.muted_text(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.focused_border())
        .style(palette.base());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
