//! Screen buffer abstraction
//!
//! The smallest surface the renderer needs from a terminal: a grid of
//! styled cells, a hardware caret, a flush, and a blocking event source.
//! [`CrosstermScreen`](crate::ui::ratatui_adapter::CrosstermScreen) drives a
//! real terminal; [`HeadlessScreen`](crate::ui::HeadlessScreen) keeps the grid
//! in memory.

use super::error::Result;
use super::types::InputEvent;
use ratatui::style::Style;

/// A terminal-like device the renderer paints onto
pub trait Screen {
    /// Current device size as `(width, height)` in cells
    fn size(&self) -> (u16, u16);

    /// Blank every cell
    fn clear(&mut self);

    /// Set the cell at `(x, y)` to `base` followed by `combining` accessories
    ///
    /// Coordinates outside the device are ignored.
    fn set_content(&mut self, x: u16, y: u16, base: char, combining: &[char], style: Style);

    /// Show the hardware caret at `(x, y)` after the next flush
    fn show_cursor(&mut self, x: u16, y: u16);

    /// Hide the hardware caret
    fn hide_cursor(&mut self);

    /// Push pending cell changes to the device
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the device fails.
    fn show(&mut self) -> Result<()>;

    /// Forget what the device displays so the next flush repaints everything
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be cleared.
    fn sync(&mut self) -> Result<()>;

    /// Block until the next input or resize event
    ///
    /// # Errors
    ///
    /// Returns an error if the event source fails or is exhausted.
    fn poll_event(&mut self) -> Result<InputEvent>;

    /// Restore the device to its normal mode; safe to call more than once
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be restored.
    fn fini(&mut self) -> Result<()>;
}
