//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.
//! Time enters only as an explicit `Instant` argument.

pub mod app_state;
pub mod carousel;
pub mod carousel_handler;
pub mod gallery;
pub mod music;
pub mod tab_handler;
pub mod theme;

// Re-export for convenience
pub use app_state::{AppState, FocusSection, StatusMessage};
pub use carousel::{
    CarouselController, CarouselState, Direction, SlideRender, TransitionToken,
    TRANSITION_DURATION,
};
pub use carousel_handler::handle_carousel_action;
pub use gallery::{FsImageProbe, GalleryState, ImageProbe};
pub use music::MusicState;
pub use tab_handler::handle_tab_action;
pub use theme::{InvalidThemeMode, ThemeMode};
