//! Project carousel rendering and hit testing.
//!
//! Every slide is rendered from its [`SlideRender`] descriptor alone:
//! - `Idle` slides are not drawn at all (hidden, non-interactive)
//! - a resting `Active` slide fills the slide area
//! - during a transition the leaving and entering slides share the area,
//!   ordered so content appears to move in the transition direction
//!
//! The bottom row carries the prev/next arrows and one dot per slide. The
//! same [`CarouselLayout`] is used for drawing and for mouse hit testing.

use super::about::render_markdown;
use super::constants::CAROUSEL_ARROW_WIDTH;
use super::helpers::{section_block, section_inner};
use super::styles::Palette;
use crate::model::Project;
use crate::state::{CarouselController, Direction, SlideRender};
use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// ===== Layout and hit testing =====

/// What a click on the carousel controls hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    /// The "previous" arrow.
    Prev,
    /// The "next" arrow.
    Next,
    /// The dot for slide `n` (0-based).
    Dot(usize),
}

/// Screen regions of the carousel inside the Projects section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Where slides are drawn.
    pub slides: Rect,
    /// "Previous" arrow target.
    pub prev: Rect,
    /// "Next" arrow target.
    pub next: Rect,
    /// One 1-cell target per slide, in order.
    pub dots: Vec<Rect>,
}

impl CarouselLayout {
    /// Compute regions for `len` slides inside `area` (the section's inner area).
    pub fn new(area: Rect, len: usize) -> Self {
        let controls_y = area.y + area.height.saturating_sub(1);
        let slides = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let arrow_width = CAROUSEL_ARROW_WIDTH.min(area.width);
        let prev = Rect::new(area.x, controls_y, arrow_width, 1.min(area.height));
        let next = Rect::new(
            area.right().saturating_sub(arrow_width),
            controls_y,
            arrow_width,
            1.min(area.height),
        );

        // Dots are "● ○ ○": one cell each with one-cell gaps.
        let dots_width = u16::try_from(len.saturating_mul(2).saturating_sub(1)).unwrap_or(u16::MAX);
        let start_x = area.x + area.width.saturating_sub(dots_width) / 2;
        let dots = (0..len)
            .map_while(|i| {
                let offset = u16::try_from(i * 2).ok()?;
                let x = start_x.checked_add(offset)?;
                (x < area.right()).then(|| Rect::new(x, controls_y, 1, 1.min(area.height)))
            })
            .collect();

        Self {
            slides,
            prev,
            next,
            dots,
        }
    }

    /// Which control, if any, is at (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<CarouselHit> {
        let position = Position::new(column, row);
        if self.prev.contains(position) {
            return Some(CarouselHit::Prev);
        }
        if self.next.contains(position) {
            return Some(CarouselHit::Next);
        }
        self.dots
            .iter()
            .position(|dot| dot.contains(position))
            .map(CarouselHit::Dot)
    }
}

/// Inner area of the Projects section drawn over `area`.
pub fn carousel_area(area: Rect) -> Rect {
    section_inner(area)
}

// ===== Rendering =====

/// Title decoration for a slide in the given render state.
fn slide_title(index: usize, len: usize, render: SlideRender) -> String {
    let position = format!("{}/{}", index + 1, len);
    match render {
        SlideRender::EnteringForward => format!(" {position} → "),
        SlideRender::EnteringBackward => format!(" ← {position} "),
        _ => format!(" {position} "),
    }
}

/// Draw one visible slide.
fn render_slide(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    index: usize,
    len: usize,
    render: SlideRender,
    palette: &Palette,
) {
    let (border, body) = if render.is_current() {
        (palette.focused_border(), palette.base())
    } else {
        (
            palette.border(),
            palette.muted_text().add_modifier(Modifier::DIM),
        )
    };

    let mut lines = vec![Line::from(Span::styled(
        project.name.clone(),
        if render.is_current() {
            palette.heading()
        } else {
            body
        },
    ))];
    if render.is_current() {
        lines.extend(render_markdown(&project.summary, palette));
    } else {
        lines.push(Line::from(Span::styled(project.summary.clone(), body)));
    }
    if !project.tech.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Tech: ", palette.muted_text()),
            Span::styled(project.tech.join(", "), body),
        ]));
    }
    if let Some(url) = &project.url {
        lines.push(Line::from(Span::styled(url.clone(), palette.muted_text())));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(slide_title(index, len, render), border));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(body)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Order the visible slides left to right.
///
/// Moving forward, the leaving slide exits to the left and the entering
/// slide comes in from the right; backward is the mirror image.
fn visible_slides(carousel: &CarouselController) -> Vec<(usize, SlideRender)> {
    let mut visible: Vec<(usize, SlideRender)> = (0..carousel.len())
        .map(|i| (i, carousel.render_state(i)))
        .filter(|(_, render)| render.is_visible())
        .collect();

    let leaving_first = carousel.state().direction() == Some(Direction::Forward);
    visible.sort_by_key(|(_, render)| render.is_current() == leaving_first);
    visible
}

/// Render the Projects section.
pub fn render_projects(
    frame: &mut Frame,
    area: Rect,
    projects: &[Project],
    carousel: &CarouselController,
    palette: &Palette,
) {
    frame.render_widget(section_block("Projects", palette, true), area);
    let layout = CarouselLayout::new(carousel_area(area), carousel.len());

    let visible = visible_slides(carousel);
    let count = u32::try_from(visible.len().max(1)).unwrap_or(1);
    let columns = Layout::horizontal(visible.iter().map(|_| Constraint::Ratio(1, count)))
        .split(layout.slides);

    for ((index, render), column) in visible.iter().zip(columns.iter()) {
        if let Some(project) = projects.get(*index) {
            render_slide(frame, *column, project, *index, carousel.len(), *render, palette);
        }
    }

    render_controls(frame, &layout, carousel, palette);
}

fn render_controls(
    frame: &mut Frame,
    layout: &CarouselLayout,
    carousel: &CarouselController,
    palette: &Palette,
) {
    frame.render_widget(
        Paragraph::new(Span::styled(" ‹ ", palette.key_style())),
        layout.prev,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" › ", palette.key_style())),
        layout.next,
    );

    for (i, dot) in layout.dots.iter().enumerate() {
        let (symbol, style) = if i == carousel.active_index() {
            ("●", palette.heading())
        } else {
            ("○", palette.muted_text())
        };
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), *dot);
    }
}

#[cfg(test)]
#[path = "projects_tests.rs"]
mod tests;
