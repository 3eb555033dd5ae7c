//! Core traits for UI abstraction layer

use super::error::Result;
use super::ratatui_adapter::ThemeName;
use super::section::DEFAULT_MARKER;
use super::types::{EscapeAction, FinderOutcome};

/// Configuration for fuzzy finder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Strings to choose from; the outcome refers to them by index
    pub items: Vec<String>,
    /// Prompt text
    pub prompt: String,
    /// Glyph marking the selected row
    pub marker: char,
    /// What the escape key does
    pub escape: EscapeAction,
    /// Color preset
    pub theme: ThemeName,
}

impl FinderConfig {
    /// Create a basic finder configuration
    #[must_use]
    pub fn new(items: Vec<String>, prompt: String) -> Self {
        Self {
            items,
            prompt,
            marker: DEFAULT_MARKER,
            escape: EscapeAction::default(),
            theme: ThemeName::default(),
        }
    }

    /// Set the selection marker
    #[must_use]
    pub const fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Set the escape key behavior
    #[must_use]
    pub const fn with_escape(mut self, escape: EscapeAction) -> Self {
        self.escape = escape;
        self
    }

    /// Set the color preset
    #[must_use]
    pub const fn with_theme(mut self, theme: ThemeName) -> Self {
        self.theme = theme;
        self
    }
}

/// Trait for fuzzy finder implementations
///
/// This trait abstracts away the specific finder backend, so callers can
/// run against the terminal or a scripted stand-in.
pub trait FuzzyFinder {
    /// Run the fuzzy finder with given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the finder cannot be initialized or
    /// if the operation fails.
    fn run(&self, config: FinderConfig) -> Result<FinderOutcome>;
}
