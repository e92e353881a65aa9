//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the whole app through key and
//! mouse events against a `TestBackend`, with a virtual clock.

mod acceptance_extras;
mod view_snapshots;
