//! In-memory screen
//!
//! [`HeadlessScreen`] keeps a grid of cells instead of talking to a
//! terminal and replays a queue of scripted input events. It lets a finder
//! session run without a TTY, which is how the tests drive it.
//!
//! ```
//! use hashi::ui::{FinderOutcome, FinderSession, HeadlessScreen, InputEvent, SessionOptions};
//!
//! let screen = HeadlessScreen::new(40, 12).with_events([
//!     InputEvent::Char('b'),
//!     InputEvent::Enter,
//! ]);
//! let mut session = FinderSession::new(screen, SessionOptions::default());
//! session.set_items(["alpha", "beta"]).unwrap();
//!
//! assert_eq!(session.find().unwrap(), FinderOutcome::Selected(1));
//! ```

use super::error::{Result, UiError};
use super::screen::Screen;
use super::types::InputEvent;
use ratatui::style::Style;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    symbol: String,
    style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }
}

/// A screen backed by memory and a scripted event queue
#[derive(Debug, Clone)]
pub struct HeadlessScreen {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    cursor: Option<(u16, u16)>,
    events: VecDeque<InputEvent>,
    flushes: usize,
    syncs: usize,
    finished: bool,
}

impl HeadlessScreen {
    /// Create a blank screen of the given size with no queued events
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
            cursor: None,
            events: VecDeque::new(),
            flushes: 0,
            syncs: 0,
            finished: false,
        }
    }

    /// Queue events to be returned by [`Screen::poll_event`]
    #[must_use]
    pub fn with_events(mut self, events: impl IntoIterator<Item = InputEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Queue one more event
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Symbol stored at `(x, y)`, or an empty string outside the grid
    #[must_use]
    pub fn symbol(&self, x: u16, y: u16) -> &str {
        self.index(x, y)
            .map_or("", |i| self.cells[i].symbol.as_str())
    }

    /// Style stored at `(x, y)`
    #[must_use]
    pub fn style(&self, x: u16, y: u16) -> Option<Style> {
        self.index(x, y).map(|i| self.cells[i].style)
    }

    /// Symbols of row `y` concatenated
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width).map(|x| self.symbol(x, y)).collect()
    }

    /// Every row, top to bottom
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    /// Where the hardware caret is shown, if anywhere
    #[must_use]
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// Number of completed flushes
    #[must_use]
    pub const fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Number of forced resyncs
    #[must_use]
    pub const fn sync_count(&self) -> usize {
        self.syncs
    }

    /// Whether [`Screen::fini`] has been called
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Events still waiting in the queue
    #[must_use]
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); usize::from(width) * usize::from(height)];
    }
}

impl Screen for HeadlessScreen {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn set_content(&mut self, x: u16, y: u16, base: char, combining: &[char], style: Style) {
        if let Some(i) = self.index(x, y) {
            let cell = &mut self.cells[i];
            cell.symbol.clear();
            cell.symbol.push(base);
            cell.symbol.extend(combining);
            cell.style = style;
        }
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn show(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.syncs += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<InputEvent> {
        let event = self.events.pop_front().ok_or(UiError::EventsExhausted)?;
        if let InputEvent::Resize { width, height } = event {
            self.resize(width, height);
        }
        Ok(event)
    }

    fn fini(&mut self) -> Result<()> {
        self.finished = true;
        self.cursor = None;
        Ok(())
    }
}
