//! Input result type

use serde::Serialize;

/// Result of a pointer event, returned to the page so it can stop propagation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

impl From<bool> for InputResult {
    fn from(handled: bool) -> Self {
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }
}
