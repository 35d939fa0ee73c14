//! Construction-time configuration for a debounced value controller.

use std::time::Duration;

/// Default quiescence delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Listener invoked with a reference to the value.
pub(crate) type Handler<T> = Box<dyn FnMut(&T)>;

/// Options for [`DebouncedValue`](crate::DebouncedValue).
///
/// All fields are optional; `new()` gives a controller with the default
/// 500ms delay, no listeners and no initial settled value.
pub struct DebounceOptions<T> {
    pub(crate) delay: Duration,
    pub(crate) default_value: Option<T>,
    pub(crate) on_change: Option<Handler<T>>,
    pub(crate) on_finish: Option<Handler<T>>,
}

impl<T> DebounceOptions<T> {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            default_value: None,
            on_change: None,
            on_finish: None,
        }
    }

    /// Set the quiescence delay required before a value is committed.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the initial settled value, published before any commit occurs.
    pub fn with_default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Listener invoked synchronously on every update, with the new live
    /// value.
    pub fn on_change(mut self, handler: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Listener invoked exactly once per commit, with the committed value,
    /// immediately before the settled value is published.
    pub fn on_finish(mut self, handler: impl FnMut(&T) + 'static) -> Self {
        self.on_finish = Some(Box::new(handler));
        self
    }
}

impl<T> Default for DebounceOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod options_tests;
