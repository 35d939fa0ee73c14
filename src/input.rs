//! Input-widget adapter for string-typed controllers.

use tui_textarea::TextArea;

use crate::controller::DebouncedValue;

impl DebouncedValue<String> {
    /// Record the textarea's current content as the live value.
    ///
    /// Call after feeding a key event to the widget, the way a change
    /// handler reads the element's content. Single-line widgets only: the
    /// first line is taken. Behaves exactly like
    /// [`set_value`](DebouncedValue::set_value), including the `on_change`
    /// notification and commit rescheduling.
    ///
    /// This adapter is deliberately confined to `String` controllers; it
    /// forwards the raw textual content without interpretation.
    pub fn read_input(&mut self, textarea: &TextArea<'_>) {
        self.set_value(textarea.lines()[0].clone());
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod input_tests;
