//! Debounced scheduling for filter runs
//!
//! Typing emits one event per keystroke, but the listing should only refilter
//! once the input settles. [`Debouncer`] models that as data: scheduling
//! records a value and a deadline, rescheduling replaces both, and the host's
//! event loop polls [`take_ready`](Debouncer::take_ready) with its own clock.
//! Nothing here spawns timers, so tests drive time with plain [`Instant`]
//! arithmetic.

use std::time::{Duration, Instant};

/// A single pending value with a fixed delay
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Task<T>>,
}

#[derive(Debug, Clone)]
struct Task<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer that holds values for `delay`
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// The configured hold delay
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to become ready at `now + delay`
    ///
    /// A previously scheduled value is discarded, so only the latest one in a
    /// burst ever fires.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Task { value, deadline: now + self.delay });
    }

    /// Takes the scheduled value if its deadline has passed
    ///
    /// Returns `None` while the value is still settling or when nothing is
    /// scheduled. A taken value will not be returned again.
    pub fn take_ready(&mut self, now: Instant) -> Option<T> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.pending.take().map(|task| task.value)
        } else {
            None
        }
    }

    /// Discards the scheduled value, returning it if there was one
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|task| task.value)
    }

    /// Whether a value is currently scheduled
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the scheduled value, if any
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|task| task.deadline)
    }
}
