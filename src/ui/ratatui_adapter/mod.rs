//! Ratatui-based fuzzy finder adapter
//!
//! This module provides the terminal implementation of the `FuzzyFinder`
//! trait. Ranking is done by [`crate::search`]; ratatui diffs and flushes
//! the cells and crossterm supplies raw mode and events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFinder                     │
//! │  (implements FuzzyFinder trait)             │
//! └────────────────────┬────────────────────────┘
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │   FinderSession (state machine, sections)   │
//! └────────────────────┬────────────────────────┘
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │   search   │ │  Ratatui  │ │ Crossterm │
//! │  (ranking) │ │  (cells)  │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod finder;
mod screen;
pub mod session;
mod state;
mod theme;

pub use events::{EventResult, handle_input, map_event, map_key};
pub use finder::RatatuiFinder;
pub use screen::CrosstermScreen;
pub use session::{FinderSession, Phase, SessionOptions};
pub use state::QueryBuffer;
pub use theme::{Theme, ThemeName};
