//! folio
//!
//! A personal portfolio rendered in the terminal: hero banner, experience
//! tabs, skills, a project carousel with directional transitions, a
//! contribution calendar, and a cat gallery.
//!
//! Follows the Pure Core / Impure Shell architecture: `model` and `state`
//! are pure and take time as an argument; `audio`, `content`,
//! `preferences`, `logging`, and `view` talk to the outside world.

pub mod audio;
pub mod config;
pub mod content;
pub mod logging;
pub mod model;
pub mod preferences;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
