//! Cat gallery modal.
//!
//! Terminals cannot show the photos themselves, so each cat gets a framed
//! card with its caption and file name.

use super::constants::{GALLERY_POPUP_HEIGHT_PERCENT, GALLERY_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Palette;
use crate::state::GalleryState;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CAT_ART: [&str; 3] = [r" /\_/\ ", r"( o.o )", r" > ^ < "];

/// Render the gallery modal over the whole frame.
pub fn render_gallery(frame: &mut Frame, gallery: &GalleryState, palette: &Palette) {
    let popup_area = centered_rect(
        GALLERY_POPUP_WIDTH_PERCENT,
        GALLERY_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );
    frame.render_widget(Clear, popup_area);

    let count = gallery.visible_count();
    let lines = match gallery.selected_image() {
        Some(image) => {
            let mut lines: Vec<Line> = CAT_ART
                .iter()
                .map(|row| Line::from(Span::styled(*row, palette.heading())))
                .collect();
            lines.push(empty_line());
            lines.push(Line::from(Span::styled(image.caption.clone(), palette.base())));
            lines.push(Line::from(Span::styled(
                image
                    .path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                palette.muted_text(),
            )));
            lines.push(empty_line());
            lines.push(Line::from(Span::styled(
                format!("{} / {}", gallery.selected_index() + 1, count),
                palette.muted_text(),
            )));
            lines
        }
        None => vec![
            empty_line(),
            Line::from(Span::styled(
                "The cats are hiding right now.",
                palette.muted_text(),
            )),
        ],
    };

    let block = Block::default()
        .title(Span::styled(" Cats ", palette.heading()))
        .title_bottom(Line::from(Span::styled(
            " ←/→ browse · Esc close ",
            palette.muted_text(),
        )))
        .borders(Borders::ALL)
        .border_style(palette.focused_border());

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        popup_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CatImage;
    use crate::state::{ImageProbe, ThemeMode};
    use crate::view::helpers::buffer_text;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::path::{Path, PathBuf};

    struct OnlyMochi;

    impl ImageProbe for OnlyMochi {
        fn can_load(&self, path: &Path) -> bool {
            path.ends_with("mochi.jpg")
        }
    }

    fn cats() -> Vec<CatImage> {
        vec![
            CatImage {
                caption: "Biscuit, mid-loaf".to_string(),
                path: PathBuf::from("cats/biscuit.jpg"),
            },
            CatImage {
                caption: "Mochi, supervising".to_string(),
                path: PathBuf::from("cats/mochi.jpg"),
            },
        ]
    }

    fn render(gallery: &GalleryState) -> String {
        let palette = Palette::for_theme(ThemeMode::Light, ColorConfig::disabled());
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| render_gallery(frame, gallery, &palette))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn shows_selected_cat_and_position() {
        let mut gallery = GalleryState::new(cats());
        gallery.open(&AlwaysLoads);

        let text = render(&gallery);
        assert!(text.contains("Biscuit, mid-loaf"));
        assert!(text.contains("biscuit.jpg"));
        assert!(text.contains("1 / 2"));
    }

    #[test]
    fn missing_images_are_not_shown() {
        let mut gallery = GalleryState::new(cats());
        gallery.open(&OnlyMochi);

        let text = render(&gallery);
        assert!(!text.contains("Biscuit"));
        assert!(text.contains("Mochi, supervising"));
        assert!(text.contains("1 / 1"));
    }

    #[test]
    fn all_missing_shows_placeholder() {
        let mut gallery = GalleryState::new(cats());
        gallery.open(&NeverLoads);

        let text = render(&gallery);
        assert!(text.contains("The cats are hiding right now."));
    }

    struct AlwaysLoads;

    impl ImageProbe for AlwaysLoads {
        fn can_load(&self, _path: &Path) -> bool {
            true
        }
    }

    struct NeverLoads;

    impl ImageProbe for NeverLoads {
        fn can_load(&self, _path: &Path) -> bool {
            false
        }
    }
}
