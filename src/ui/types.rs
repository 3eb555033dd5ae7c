//! Common types for UI abstraction layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input delivered by a screen's event source
///
/// Devices translate their native events into this set; everything the
/// finder reacts to is listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A printable character
    Char(char),
    /// Delete the character before the caret
    Backspace,
    /// Delete the character at the caret
    Delete,
    /// Move the caret left
    Left,
    /// Move the caret right
    Right,
    /// Move the list selection up
    Up,
    /// Move the list selection down
    Down,
    /// Confirm the highlighted candidate
    Enter,
    /// Cancel key
    Escape,
    /// Abort immediately and restore the terminal
    ForceQuit,
    /// Repaint everything from scratch
    Redraw,
    /// The device changed size
    Resize {
        /// New width in cells
        width: u16,
        /// New height in cells
        height: u16,
    },
}

/// How a finder session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinderOutcome {
    /// The user confirmed a candidate; holds its original index
    Selected(usize),
    /// The user aborted without choosing
    Aborted,
}

impl FinderOutcome {
    /// Index of the selected candidate, if any
    #[must_use]
    pub const fn selected(self) -> Option<usize> {
        match self {
            Self::Selected(index) => Some(index),
            Self::Aborted => None,
        }
    }

    /// Whether the session was aborted
    #[must_use]
    pub const fn is_aborted(self) -> bool {
        matches!(self, Self::Aborted)
    }
}

/// What the cancel (escape) key does while the finder runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EscapeAction {
    /// Leave the finder without a selection
    #[default]
    Abort,
    /// Ignore the key
    Ignore,
}

impl EscapeAction {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Ignore => "ignore",
        }
    }
}

impl fmt::Display for EscapeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
