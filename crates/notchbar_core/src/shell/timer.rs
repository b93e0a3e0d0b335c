//! Cancellable deferred collapse.
//!
//! Deadline based: the event loop passes the current instant to
//! [`CollapseTimer::take_due`] on every tick, so no thread or sleep is needed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Idle,
    /// `None` when `now + delay` is past the clock's range; never due.
    Due(Option<Instant>),
}

/// Holds at most one pending collapse.
#[derive(Debug, Clone)]
pub struct CollapseTimer {
    delay: Duration,
    pending: Pending,
}

impl CollapseTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Pending::Idle,
        }
    }

    /// Applies to collapses scheduled after this call.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Replaces any pending collapse with one due at `now + delay`.
    pub fn schedule(&mut self, now: Instant) {
        self.pending = Pending::Due(now.checked_add(self.delay));
    }

    /// Returns whether a pending collapse was cancelled.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.pending, Pending::Idle) != Pending::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.pending != Pending::Idle
    }

    /// Fires the pending collapse if its deadline has passed.
    ///
    /// Firing clears it; a later call returns `false` until rescheduled.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Pending::Due(Some(deadline)) if now >= deadline => {
                self.pending = Pending::Idle;
                true
            }
            _ => false,
        }
    }
}
