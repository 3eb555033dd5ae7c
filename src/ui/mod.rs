//! UI abstraction layer
//!
//! This module provides the screen model, the finder built on it, and the
//! backend-agnostic [`FuzzyFinder`] trait callers program against.
//!
//! # Core Pieces
//!
//! - **`Screen`** - Cell grid, caret, flush and event source
//! - **`Section`** - Bordered text region with an optional cursor
//! - **`Renderer`** - Ordered sections painted onto one screen
//! - **`FinderSession`** - The interactive picker state machine
//! - **`FuzzyFinder`** - Run a picker and get an index back
//! - **`OutputWriter`** - Status messages around a run
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Caller (cli, picker)               │
//! └────────────────┬────────────────────────┘
//!                  │ FuzzyFinder
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │  FinderSession  ──►  Renderer/Section   │
//! └────────────────┬────────────────────────┘
//!                  │ Screen
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │CrosstermScreen│  │ HeadlessScreen    │
//! │ (terminal)    │  │ (memory, tests)   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Finder
//!
//! ```no_run
//! use hashi::ui::{FuzzyFinder, FinderConfig, FinderOutcome, Result};
//!
//! struct FirstItem;
//!
//! impl FuzzyFinder for FirstItem {
//!     fn run(&self, _config: FinderConfig) -> Result<FinderOutcome> {
//!         Ok(FinderOutcome::Selected(0))
//!     }
//! }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use hashi::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.error("Something went wrong");
//! output.warning("Be careful");
//! output.info("Additional info");
//! ```

mod error;
mod glyph;
mod headless;
mod renderer;
mod screen;
pub mod section;
mod traits;
mod types;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use glyph::{Glyph, display_width};
pub use headless::HeadlessScreen;
pub use output::{OutputWriter, StdoutWriter};
pub use renderer::Renderer;
pub use screen::Screen;
pub use section::{Bounds, Cursor, CursorKind, Section};
pub use traits::{FinderConfig, FuzzyFinder};
pub use types::{EscapeAction, FinderOutcome, InputEvent};

pub use ratatui_adapter::{
    CrosstermScreen, FinderSession, RatatuiFinder, SessionOptions, Theme, ThemeName,
};
