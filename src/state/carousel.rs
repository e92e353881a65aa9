//! Project carousel transition controller.
//!
//! Translates navigation intents (previous, next, jump to slide) into a
//! short two-frame transition: the outgoing slide leaves while the incoming
//! slide enters. A completion timer returns the carousel to rest after a
//! fixed window.
//!
//! The controller never reads the clock itself. Callers pass `now` into every
//! operation and drive the timer with [`CarouselController::tick`], which
//! keeps the whole state machine deterministic under test.

use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Default length of the enter/exit animation window.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);

// ===== Direction =====

/// Which way a transition is moving.
///
/// Reflects navigational intent, not numeric distance: "next" from the last
/// slide to the first is still `Forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Moving toward later slides.
    Forward,
    /// Moving toward earlier slides.
    Backward,
}

// ===== SlideRender =====

/// Per-slide render descriptor consumed by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideRender {
    /// Not displayed. Hidden from assistive output and not interactive.
    Idle,
    /// Fully visible at rest, no transition treatment.
    Active,
    /// Incoming slide while moving forward (enters from the trailing edge).
    EnteringForward,
    /// Incoming slide while moving backward (enters from the leading edge).
    EnteringBackward,
    /// Outgoing slide while moving forward (exits toward the leading edge).
    LeavingForward,
    /// Outgoing slide while moving backward (exits toward the trailing edge).
    LeavingBackward,
}

impl SlideRender {
    /// Whether the slide is drawn at all.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the slide is the one the user can interact with.
    pub fn is_current(self) -> bool {
        matches!(
            self,
            Self::Active | Self::EnteringForward | Self::EnteringBackward
        )
    }

    /// Direction of the transition this slide is part of, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::EnteringForward | Self::LeavingForward => Some(Direction::Forward),
            Self::EnteringBackward | Self::LeavingBackward => Some(Direction::Backward),
            Self::Idle | Self::Active => None,
        }
    }
}

// ===== CarouselState =====

/// An in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Transition {
    leaving_index: usize,
    direction: Direction,
}

/// Carousel state. Pure data.
///
/// The leaving slide and the direction are stored together, so "leaving set
/// but no direction" cannot be represented.
///
/// # Cardinality
/// - Resting: `len` states (one per active slide)
/// - Transitioning: `len * (len - 1) * 2` states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    active_index: usize,
    transition: Option<Transition>,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselState {
    /// Initial state: resting on the first slide.
    pub fn new() -> Self {
        Self {
            active_index: 0,
            transition: None,
        }
    }

    /// The currently displayed slide.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The slide mid-exit, if a transition is in flight.
    pub fn leaving_index(&self) -> Option<usize> {
        self.transition.map(|t| t.leaving_index)
    }

    /// Direction of the in-flight transition, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.transition.map(|t| t.direction)
    }

    /// Whether a transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Start a transition to `target`. Returns `self` unchanged when
    /// `target` is already active.
    pub fn transition_to(self, target: usize, direction: Direction) -> Self {
        if target == self.active_index {
            return self;
        }
        Self {
            active_index: target,
            transition: Some(Transition {
                leaving_index: self.active_index,
                direction,
            }),
        }
    }

    /// Drop any in-flight transition, keeping the active slide.
    pub fn settle(self) -> Self {
        Self {
            active_index: self.active_index,
            transition: None,
        }
    }

    /// Render descriptor for slide `index`.
    pub fn render_state(&self, index: usize) -> SlideRender {
        match self.transition {
            None if index == self.active_index => SlideRender::Active,
            Some(t) if index == self.active_index => match t.direction {
                Direction::Forward => SlideRender::EnteringForward,
                Direction::Backward => SlideRender::EnteringBackward,
            },
            Some(t) if index == t.leaving_index => match t.direction {
                Direction::Forward => SlideRender::LeavingForward,
                Direction::Backward => SlideRender::LeavingBackward,
            },
            _ => SlideRender::Idle,
        }
    }
}

// ===== CarouselController =====

/// Identity of one scheduled completion.
///
/// Every transition request mints a fresh token; completions carrying an
/// older token are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken {
    generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct PendingCompletion {
    token: TransitionToken,
    deadline: Instant,
}

/// Carousel controller: state plus a cancellable completion timer.
///
/// # State Machine
///
/// - `Resting --go_to/go_next/go_prev--> Transitioning`
/// - `Transitioning --go_to/go_next/go_prev--> Transitioning` (supersedes the
///   previous transition and its timer)
/// - `Transitioning --timer elapsed--> Resting`
///
/// There is no terminal state; the controller cycles until disposed.
#[derive(Debug, Clone)]
pub struct CarouselController {
    state: CarouselState,
    len: usize,
    duration: Duration,
    generation: u64,
    pending: Option<PendingCompletion>,
}

impl CarouselController {
    /// Create a controller over `len` slides with the default 400ms window.
    ///
    /// `len` is treated as at least 1.
    pub fn new(len: usize) -> Self {
        Self::with_duration(len, TRANSITION_DURATION)
    }

    /// Create a controller with a custom transition window.
    pub fn with_duration(len: usize, duration: Duration) -> Self {
        Self {
            state: CarouselState::new(),
            len: len.max(1),
            duration,
            generation: 0,
            pending: None,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> CarouselState {
        self.state
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a carousel holds at least one slide.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Transition window length.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Shortcut for `state().active_index()`.
    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    /// Render descriptor for slide `index`.
    pub fn render_state(&self, index: usize) -> SlideRender {
        self.state.render_state(index)
    }

    /// Jump directly to `target`.
    ///
    /// Direction comes from comparing `target` with the active index.
    /// Out-of-range targets are clamped to the last slide. Jumping to the
    /// active slide is a no-op and starts no timer.
    pub fn go_to(&mut self, target: usize, now: Instant) -> Option<TransitionToken> {
        let target = target.min(self.len - 1);
        let direction = if target > self.state.active_index() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.start(target, direction, now)
    }

    /// Advance to the next slide, wrapping from the last to the first.
    pub fn go_next(&mut self, now: Instant) -> Option<TransitionToken> {
        let target = (self.state.active_index() + 1) % self.len;
        self.start(target, Direction::Forward, now)
    }

    /// Go back to the previous slide, wrapping from the first to the last.
    pub fn go_prev(&mut self, now: Instant) -> Option<TransitionToken> {
        let target = (self.state.active_index() + self.len - 1) % self.len;
        self.start(target, Direction::Backward, now)
    }

    fn start(
        &mut self,
        target: usize,
        direction: Direction,
        now: Instant,
    ) -> Option<TransitionToken> {
        if target == self.state.active_index() {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        let token = TransitionToken {
            generation: self.generation,
        };

        if self.pending.is_some() {
            trace!(generation = self.generation, "superseding in-flight transition");
        }

        self.state = self.state.transition_to(target, direction);
        self.pending = Some(PendingCompletion {
            token,
            deadline: now + self.duration,
        });

        debug!(
            active = target,
            leaving = ?self.state.leaving_index(),
            ?direction,
            "carousel transition started"
        );

        Some(token)
    }

    /// Timer callback: return to rest.
    ///
    /// Returns `false` and leaves state untouched when `token` belongs to a
    /// superseded (or cancelled) transition.
    pub fn on_transition_complete(&mut self, token: TransitionToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.state = self.state.settle();
                debug!(active = self.state.active_index(), "carousel at rest");
                true
            }
            _ => {
                trace!(generation = token.generation, "ignoring stale completion");
                false
            }
        }
    }

    /// Fire the pending completion if its deadline has passed.
    ///
    /// Returns `true` when the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if pending.deadline <= now => self.on_transition_complete(pending.token),
            _ => false,
        }
    }

    /// Deadline of the pending completion, if one is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Cancel the pending completion. Called when the view goes away.
    pub fn dispose(&mut self) {
        if self.pending.take().is_some() {
            debug!("cancelled pending carousel completion");
        }
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
