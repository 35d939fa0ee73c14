//! Single-deadline delay timer polled from the host event loop.
//!
//! Holds at most one armed deadline. Arming replaces any prior deadline, so
//! rearming and cancellation are the same operation from the caller's point
//! of view: the old deadline can never fire once a new one is scheduled.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct DelayTimer {
    /// Deadline of the pending commit, if one is armed
    deadline: Option<Instant>,
}

impl DelayTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to expire after `delay`, replacing any prior deadline.
    pub fn schedule(&mut self, delay: Duration) {
        self.schedule_at(Instant::now(), delay);
    }

    pub(crate) fn schedule_at(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Clear the deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is currently armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the armed deadline has elapsed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Time until the deadline elapses. `None` when idle, zero once the
    /// deadline has passed. Lets a host clamp its event-poll timeout so a
    /// pending commit is observed promptly.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.time_remaining_at(Instant::now())
    }

    pub(crate) fn time_remaining_at(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod timer_tests;
