//! State for the cat gallery modal.

use crate::model::CatImage;
use std::path::Path;
use tracing::warn;

/// Answers whether an image can be loaded.
pub trait ImageProbe {
    /// `true` when the image at `path` is displayable.
    fn can_load(&self, path: &Path) -> bool;
}

/// Probes the filesystem: an image loads when it is a readable, non-empty file.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageProbe;

impl ImageProbe for FsImageProbe {
    fn can_load(&self, path: &Path) -> bool {
        std::fs::metadata(path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }
}

/// State for the cat gallery modal.
///
/// Images that fail to load are excluded from the visible collection for
/// the rest of the session. `selected` indexes the visible collection.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    visible: bool,
    images: Vec<CatImage>,
    missing: Vec<bool>,
    selected: usize,
}

impl GalleryState {
    /// Closed gallery over `images`.
    pub fn new(images: Vec<CatImage>) -> Self {
        let missing = vec![false; images.len()];
        Self {
            visible: false,
            images,
            missing,
            selected: 0,
        }
    }

    /// Check if modal is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Images that have not failed to load, in order.
    pub fn visible_images(&self) -> impl Iterator<Item = &CatImage> {
        self.images
            .iter()
            .zip(&self.missing)
            .filter(|(_, missing)| !**missing)
            .map(|(image, _)| image)
    }

    /// Number of displayable images.
    pub fn visible_count(&self) -> usize {
        self.missing.iter().filter(|m| !**m).count()
    }

    /// Selected position within the visible images.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected image, if any image is displayable.
    pub fn selected_image(&self) -> Option<&CatImage> {
        self.visible_images().nth(self.selected)
    }

    /// Probe every remaining image and open the modal.
    pub fn open(&mut self, probe: &dyn ImageProbe) {
        self.probe_images(probe);
        self.visible = true;
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Toggle modal visibility.
    pub fn toggle(&mut self, probe: &dyn ImageProbe) {
        if self.visible {
            self.close();
        } else {
            self.open(probe);
        }
    }

    /// Exclude every image the probe cannot load.
    pub fn probe_images(&mut self, probe: &dyn ImageProbe) {
        for (image, missing) in self.images.iter().zip(self.missing.iter_mut()) {
            if !*missing && !probe.can_load(&image.path) {
                warn!(path = ?image.path, "cat image missing, hiding it");
                *missing = true;
            }
        }
        self.clamp_selection();
    }

    /// Move selection forward, wrapping.
    pub fn select_next(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move selection backward, wrapping.
    pub fn select_prev(&mut self) {
        let count = self.visible_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Select by 0-based position; out-of-range positions are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.visible_count() {
            self.selected = index;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }
}
