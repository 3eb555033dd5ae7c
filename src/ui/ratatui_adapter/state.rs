//! Query buffer state
//!
//! The text typed into the finder's input box plus the caret position.
//! Positions are character offsets, not byte offsets.

use std::fmt;

/// Editable query text with a caret
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuffer {
    chars: Vec<char>,
    caret: usize,
}

impl QueryBuffer {
    /// Create an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chars: Vec::new(),
            caret: 0,
        }
    }

    /// Caret offset in characters, always within `0..=len`
    #[must_use]
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Number of characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the buffer is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Characters before the caret
    #[must_use]
    pub fn before_caret(&self) -> String {
        self.chars[..self.caret].iter().collect()
    }

    /// Insert `c` at the caret and advance past it
    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.caret, c);
        self.caret += 1;
    }

    /// Remove the character left of the caret
    ///
    /// Returns `false` when the caret is already at the start.
    pub fn backspace(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        self.chars.remove(self.caret);
        true
    }

    /// Remove the character under the caret
    ///
    /// Returns `false` when the caret is at the end.
    pub fn delete(&mut self) -> bool {
        if self.caret >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.caret);
        true
    }

    /// Move the caret one character left
    pub fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        true
    }

    /// Move the caret one character right
    pub fn move_right(&mut self) -> bool {
        if self.caret >= self.chars.len() {
            return false;
        }
        self.caret += 1;
        true
    }
}

impl fmt::Display for QueryBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
