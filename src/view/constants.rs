//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the hero banner in lines (border + name line + socials line).
pub const HERO_HEIGHT: u16 = 4;

/// Height of the section navigation bar in lines.
pub const NAV_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the experience tab bar in lines (border + content).
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Width of each carousel arrow hit target (" ‹ ").
pub const CAROUSEL_ARROW_WIDTH: u16 = 3;

/// Weeks shown in the contribution calendar.
pub const CALENDAR_WEEKS: usize = 53;

/// Terminal cells per calendar cell (glyph + gap).
pub const CALENDAR_CELL_WIDTH: u16 = 2;

/// Width of the weekday label column in the calendar.
pub const CALENDAR_LABEL_WIDTH: u16 = 4;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the gallery modal.
pub const GALLERY_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for the gallery modal.
pub const GALLERY_POPUP_HEIGHT_PERCENT: u16 = 60;
