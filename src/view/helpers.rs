//! Small rendering helpers shared by the section widgets.

use super::styles::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `"  key  value"` with the key highlighted.
pub fn key_value_line(key: &str, value: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<10}"), palette.key_style()),
        Span::styled(value.to_string(), palette.base()),
    ])
}

/// Bordered block titled `title`.
///
/// Every section uses the same border set so inner areas can be computed
/// without the palette (see [`section_inner`]).
pub fn section_block(title: &str, palette: &Palette, focused: bool) -> Block<'static> {
    let border_style = if focused {
        palette.focused_border()
    } else {
        palette.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {title} "), palette.heading()))
        .style(palette.base())
}

/// Inner area of a [`section_block`] drawn over `area`.
pub fn section_inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Truncate `text` to at most `max_width` terminal cells, adding `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Centered sub-rectangle covering the given percentages of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Style `s` with `palette.base()` underneath.
pub fn over_base(palette: &Palette, s: Style) -> Style {
    palette.base().patch(s)
}

/// Buffer contents as text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
