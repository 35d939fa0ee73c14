//! Debounced state primitive for interactive terminal UIs.
//!
//! Tracks an input value and, after a configurable quiescence delay with no
//! further changes, commits it as the "settled" value and notifies a
//! listener. Typical use: running an expensive query only once typing has
//! paused, while still rendering every keystroke immediately.
//!
//! The controller is driven by the host application's event loop: call
//! [`DebouncedValue::poll`] once per loop iteration, the same place a TUI
//! polls for terminal events.
//!
//! ```
//! use std::time::Duration;
//! use debounced_value::{DebounceOptions, DebouncedValue};
//!
//! let mut search = DebouncedValue::new(
//!     DebounceOptions::new()
//!         .with_delay(Duration::from_millis(300))
//!         .with_default_value(String::new())
//!         .on_finish(|query: &String| println!("running search: {query}")),
//! );
//!
//! search.set_value(".name".to_string());
//! assert_eq!(search.value(), Some(&".name".to_string()));
//! assert_eq!(search.debounced_value(), Some(&String::new()));
//!
//! // In the host event loop, once per tick:
//! if search.poll() {
//!     // the settled value was just committed
//! }
//! ```

pub mod controller;
mod input;
pub mod options;
pub mod timer;

// Re-export commonly used types for convenience
pub use controller::DebouncedValue;
pub use options::{DEFAULT_DELAY_MS, DebounceOptions};
pub use timer::DelayTimer;
