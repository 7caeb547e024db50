//! Trailing-edge rebuild coalescing
//!
//! Automaton construction is expensive, so bursts of document changes are
//! collapsed into one rebuild that fires a fixed delay after the *last*
//! change. The clock is passed in by the caller; nothing here sleeps or
//! spawns.

use std::time::{Duration, Instant};

/// Fixed-delay, trailing-edge debouncer
#[derive(Debug, Clone)]
pub struct RebuildDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl RebuildDebouncer {
    /// Create a debouncer with no rebuild pending
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Coalescing window
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the window; an already scheduled deadline is kept.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Record a change at `now`, pushing the deadline back.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Check whether a rebuild is waiting
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending rebuild fires, if any
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Drop any pending rebuild
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}
