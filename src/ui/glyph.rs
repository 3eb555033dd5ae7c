//! Display glyph normalization
//!
//! Column arithmetic assumes every glyph covers at least one cell. Zero-width
//! characters (combining marks and the like) are therefore emitted as a space
//! placeholder carrying the character as a combining accessory.

use unicode_width::UnicodeWidthChar;

/// A character prepared for placement in a single screen cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Character occupying the cell
    pub base: char,
    /// Zero-width character attached to the base
    pub combining: Option<char>,
    /// Number of columns the glyph advances
    pub width: u16,
}

impl Glyph {
    /// Normalize `c` for display
    #[must_use]
    pub fn from_char(c: char) -> Self {
        match c.width() {
            Some(0) => Self {
                base: ' ',
                combining: Some(c),
                width: 1,
            },
            // control characters
            None => Self {
                base: ' ',
                combining: None,
                width: 1,
            },
            Some(width) => Self {
                base: c,
                combining: None,
                width: u16::try_from(width).unwrap_or(1),
            },
        }
    }

    /// Combining accessories as a slice
    #[must_use]
    pub fn combining(&self) -> &[char] {
        self.combining.as_slice()
    }
}

/// Display width of `text` after normalization
#[must_use]
pub fn display_width(text: &str) -> u16 {
    text.chars()
        .map(|c| Glyph::from_char(c).width)
        .fold(0u16, u16::saturating_add)
}
