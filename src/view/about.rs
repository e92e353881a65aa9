//! About section: markdown introduction plus social links.

use super::helpers::{empty_line, key_value_line, over_base, section_block};
use super::styles::Palette;
use crate::model::{Profile, SocialLink};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use tui_markdown::from_str;

/// Render markdown as owned lines, with `palette.base()` under every span.
pub fn render_markdown(markdown_text: &str, palette: &Palette) -> Vec<Line<'static>> {
    let text = from_str(markdown_text);

    text.lines
        .into_iter()
        .map(|line| {
            let owned_spans: Vec<_> = line
                .spans
                .into_iter()
                .map(|span| Span::styled(span.content.into_owned(), over_base(palette, span.style)))
                .collect();
            Line::from(owned_spans)
        })
        .collect()
}

/// Render the About section.
pub fn render_about(
    frame: &mut Frame,
    area: Rect,
    profile: &Profile,
    socials: &[SocialLink],
    palette: &Palette,
) {
    let mut lines = render_markdown(&profile.about, palette);

    if !socials.is_empty() {
        lines.push(empty_line());
        lines.push(Line::from(Span::styled("Find me", palette.heading())));
        lines.extend(
            socials
                .iter()
                .map(|link| key_value_line(&link.label, &link.url, palette)),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(section_block("About", palette, true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
