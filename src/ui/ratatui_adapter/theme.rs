//! Color theme definitions for the finder
//!
//! Defines colors and styles used by the list and input panels.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named theme presets, as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light text on a dark terminal
    #[default]
    Dark,
    /// Dark text on a light terminal
    Light,
}

/// Theme configuration for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Color for candidate text and the selection marker
    pub text: Color,
    /// Color for the list border
    pub border: Color,
    /// Color for the prompt and query
    pub input: Color,
    /// Color for the input border
    pub focus: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            text: Color::White,
            border: Color::DarkGray,
            input: Color::Cyan,
            focus: Color::Cyan,
        }
    }

    /// Create a light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            text: Color::Black,
            border: Color::Gray,
            input: Color::Blue,
            focus: Color::Blue,
        }
    }

    /// Resolve a preset by name
    #[must_use]
    pub const fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    /// Style for candidate lines
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for the list border
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the prompt and query text
    #[must_use]
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input).add_modifier(Modifier::BOLD)
    }

    /// Style for the input border
    #[must_use]
    pub fn input_border_style(&self) -> Style {
        Style::default().fg(self.focus)
    }
}
