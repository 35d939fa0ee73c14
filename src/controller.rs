//! Debounced value controller.
//!
//! Couples a live value (updated on every keystroke) with a settled value
//! (published only after the quiescence delay) and a single pending commit
//! deadline. The host event loop drives commits by calling [`poll`] once
//! per tick.
//!
//! [`poll`]: DebouncedValue::poll

use std::fmt;
use std::time::{Duration, Instant};

use crate::options::{DebounceOptions, Handler};
use crate::timer::DelayTimer;

/// Distinguishes the controller's construction from later reactions, so no
/// commit is scheduled merely because the controller came into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activation {
    Uninitialized,
    Active,
}

/// Debounced state for a single field or widget.
///
/// `value()` always reflects the most recent update immediately;
/// `debounced_value()` lags behind it by at least the configured delay and
/// only ever carries values that survived a full quiescence window.
pub struct DebouncedValue<T> {
    /// Most recently requested value, set synchronously on every update
    value: Option<T>,
    /// Committed value, updated only when the delay elapses uninterrupted
    debounced_value: Option<T>,
    delay: Duration,
    on_change: Option<Handler<T>>,
    on_finish: Option<Handler<T>>,
    activation: Activation,
    timer: DelayTimer,
}

impl<T> DebouncedValue<T> {
    pub fn new(options: DebounceOptions<T>) -> Self {
        let mut controller = Self {
            value: None,
            debounced_value: options.default_value,
            delay: options.delay,
            on_change: options.on_change,
            on_finish: options.on_finish,
            activation: Activation::Uninitialized,
            timer: DelayTimer::new(),
        };
        // Initial activation: transitions to Active without arming a timer
        controller.rearm_at(Instant::now());
        controller
    }

    /// Controller with the given delay and no listeners.
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(DebounceOptions::new().with_delay(delay))
    }

    /// The live value: most recent update, unthrottled.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The settled value: last committed update, or the configured default
    /// before any commit.
    pub fn debounced_value(&self) -> Option<&T> {
        self.debounced_value.as_ref()
    }

    /// Whether a commit is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// The configured quiescence delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time until the pending commit fires, or `None` when no commit is
    /// scheduled. Hosts can clamp their event-poll timeout to this so the
    /// commit is observed without waiting out a full poll interval.
    pub fn poll_timeout(&self) -> Option<Duration> {
        self.timer.time_remaining()
    }

    /// Record a new live value and reschedule the commit.
    ///
    /// Invokes the `on_change` listener synchronously with the new value
    /// before returning, then rearms the pending commit deadline. Any
    /// previously scheduled commit is superseded.
    pub fn set_value(&mut self, new_value: T) {
        self.set_value_at(new_value, Instant::now());
    }

    fn set_value_at(&mut self, new_value: T, now: Instant) {
        self.value = Some(new_value);
        if let (Some(handler), Some(value)) = (self.on_change.as_mut(), self.value.as_ref()) {
            handler(value);
        }
        self.rearm_at(now);
    }

    /// Change the quiescence delay.
    ///
    /// A pending commit is rescheduled against the new delay, measured from
    /// the moment of the change. Setting the same delay is a no-op.
    pub fn set_delay(&mut self, delay: Duration) {
        self.set_delay_at(delay, Instant::now());
    }

    fn set_delay_at(&mut self, delay: Duration, now: Instant) {
        if self.delay == delay {
            return;
        }
        self.delay = delay;
        self.rearm_at(now);
    }

    /// The commit-scheduling reaction, run on construction and whenever the
    /// live value or delay changes.
    fn rearm_at(&mut self, now: Instant) {
        // Skip the very first run so the caller-supplied default survives
        // until a real change occurs
        if self.activation == Activation::Uninitialized {
            self.activation = Activation::Active;
            return;
        }

        if self.timer.is_pending() {
            log::debug!("superseding pending commit");
        }
        self.timer.cancel();

        if self.value.is_some() {
            self.timer.schedule_at(now, self.delay);
            log::debug!("commit scheduled in {:?}", self.delay);
        } else {
            log::debug!("no live value, nothing to schedule");
        }
    }
}

impl<T: Clone> DebouncedValue<T> {
    /// Host tick: commit the live value if the quiescence delay has elapsed.
    ///
    /// When the pending deadline has expired, invokes the `on_finish`
    /// listener with the live value, then publishes it as the settled value
    /// and returns `true`. Returns `false` when no commit was due.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    fn poll_at(&mut self, now: Instant) -> bool {
        if !self.timer.is_expired_at(now) {
            return false;
        }
        self.timer.cancel();

        let Some(value) = self.value.clone() else {
            return false;
        };
        if let Some(handler) = self.on_finish.as_mut() {
            handler(&value);
        }
        self.debounced_value = Some(value);
        log::debug!("value committed after quiescence");
        true
    }
}

impl<T> Default for DebouncedValue<T> {
    fn default() -> Self {
        Self::new(DebounceOptions::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for DebouncedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebouncedValue")
            .field("value", &self.value)
            .field("debounced_value", &self.debounced_value)
            .field("delay", &self.delay)
            .field("pending", &self.timer.is_pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
