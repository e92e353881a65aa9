//! Contribution calendar: the last 53 weeks as a 7-row heat map.
//!
//! Columns are weeks (oldest on the left), rows are weekdays starting on
//! Sunday. Each cell shows one of five intensity levels.

use super::constants::{CALENDAR_CELL_WIDTH, CALENDAR_LABEL_WIDTH, CALENDAR_WEEKS};
use super::helpers::{empty_line, section_block, section_inner};
use super::styles::Palette;
use crate::model::ContributionDay;
use chrono::{Datelike, Duration, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::collections::HashMap;

/// Glyph per intensity level, so the calendar reads without color.
const LEVEL_GLYPHS: [&str; 5] = ["·", "░", "▒", "▓", "█"];

/// Weekday labels; only alternate rows are labelled.
const ROW_LABELS: [&str; 7] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// A 53x7 grid of daily counts. `None` marks days after `today`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// `weeks[w][d]`: week `w` (0 = oldest), weekday `d` (0 = Sunday).
    pub weeks: Vec<[Option<u32>; 7]>,
    /// Highest count in the window.
    pub max: u32,
    /// Sum of all counts in the window.
    pub total: u64,
}

impl CalendarGrid {
    /// Build the grid for the 53 weeks ending with the week containing `today`.
    ///
    /// Days without an entry count as zero; multiple entries for one date
    /// are summed, saturating at `u32::MAX`.
    pub fn build(days: &[ContributionDay], today: NaiveDate) -> Self {
        let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
        for day in days {
            let count = counts.entry(day.date).or_default();
            *count = count.saturating_add(day.count);
        }

        let offset = i64::from(today.weekday().num_days_from_sunday());
        let weeks_back = i64::try_from(CALENDAR_WEEKS - 1).unwrap_or_default();
        let start = today - Duration::days(offset) - Duration::weeks(weeks_back);

        let mut max = 0;
        let mut total = 0u64;
        let weeks = (0..CALENDAR_WEEKS)
            .map(|week| {
                let mut column = [None; 7];
                for (weekday, cell) in column.iter_mut().enumerate() {
                    let index = i64::try_from(week * 7 + weekday).unwrap_or_default();
                    let date = start + Duration::days(index);
                    if date <= today {
                        let count = counts.get(&date).copied().unwrap_or(0);
                        max = max.max(count);
                        total += u64::from(count);
                        *cell = Some(count);
                    }
                }
                column
            })
            .collect();

        Self { weeks, max, total }
    }
}

/// Intensity level 0-4 for `count` relative to the window maximum.
///
/// Zero is always level 0; otherwise levels are quartiles of `max`, so the
/// busiest day is level 4 and any activity is at least level 1.
pub fn intensity_level(count: u32, max: u32) -> u8 {
    if count == 0 || max == 0 {
        return 0;
    }
    let level = (u64::from(count) * 4).div_ceil(u64::from(max));
    u8::try_from(level.clamp(1, 4)).unwrap_or(4)
}

fn cell_span(count: Option<u32>, max: u32, palette: &Palette) -> Span<'static> {
    match count {
        Some(count) => {
            let level = intensity_level(count, max);
            Span::styled(
                format!("{} ", LEVEL_GLYPHS[usize::from(level)]),
                Style::default()
                    .fg(palette.heat_color(level))
                    .bg(palette.background),
            )
        }
        None => Span::styled("  ", palette.base()),
    }
}

/// Render the Contributions section.
///
/// When the area is too narrow for all 53 weeks, the most recent weeks
/// that fit are shown.
pub fn render_contributions(
    frame: &mut Frame,
    area: Rect,
    days: &[ContributionDay],
    today: NaiveDate,
    palette: &Palette,
) {
    frame.render_widget(section_block("Contributions", palette, true), area);
    let inner = section_inner(area);

    let grid = CalendarGrid::build(days, today);
    let fitting =
        usize::from(inner.width.saturating_sub(CALENDAR_LABEL_WIDTH) / CALENDAR_CELL_WIDTH);
    let shown = &grid.weeks[grid.weeks.len().saturating_sub(fitting)..];

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} contributions in the last year", grid.total),
            palette.heading(),
        )),
        empty_line(),
    ];

    for (weekday, label) in ROW_LABELS.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{label:<width$}", width = usize::from(CALENDAR_LABEL_WIDTH)),
            palette.muted_text(),
        )];
        spans.extend(
            shown
                .iter()
                .map(|week| cell_span(week[weekday], grid.max, palette)),
        );
        lines.push(Line::from(spans));
    }

    lines.push(empty_line());
    let mut legend = vec![Span::styled("Less ", palette.muted_text())];
    legend.extend((0..=4u8).map(|level| {
        Span::styled(
            format!("{} ", LEVEL_GLYPHS[usize::from(level)]),
            Style::default().fg(palette.heat_color(level)),
        )
    }));
    legend.push(Span::styled("More", palette.muted_text()));
    lines.push(Line::from(legend));

    frame.render_widget(Paragraph::new(lines).style(palette.base()), inner);
}
