//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod key_action;
pub mod portfolio;

// Re-export for convenience
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
pub use portfolio::{
    CatImage, ContributionDay, Experience, Portfolio, Profile, Project, SkillGroup, SocialLink,
};
