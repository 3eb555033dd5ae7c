//! Terminal-backed screen
//!
//! [`CrosstermScreen`] keeps its own back buffer of cells and copies it into
//! a ratatui frame on every flush, letting ratatui diff against what is on
//! the terminal. The UI is drawn on stderr so stdout stays free for the
//! selection.

use super::events::map_event;
use crate::ui::error::{Result, UiError};
use crate::ui::screen::Screen;
use crate::ui::types::InputEvent;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Position, Rect, Size},
    style::Style,
};
use std::io::{self, Stderr};
use tracing::{debug, info, warn};

type Backend = CrosstermBackend<Stderr>;

/// A [`Screen`] on the controlling terminal
///
/// Raw mode and the alternate screen are entered by [`init`](Self::init)
/// and left by [`Screen::fini`], which also runs on drop.
pub struct CrosstermScreen {
    terminal: Terminal<Backend>,
    back: Buffer,
    cursor: Option<(u16, u16)>,
    active: bool,
}

impl CrosstermScreen {
    /// Acquire the terminal
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalInit` if raw mode, the alternate screen or
    /// the size query fails. Anything already switched on is switched back
    /// off first.
    pub fn init() -> Result<Self> {
        let (terminal, size) = match Self::setup_terminal() {
            Ok(acquired) => acquired,
            Err(e) => {
                if let Err(cleanup) = Self::cleanup_terminal() {
                    warn!("terminal cleanup after failed init: {cleanup}");
                }
                return Err(UiError::TerminalInit(e));
            }
        };
        info!(width = size.width, height = size.height, "terminal acquired");

        Ok(Self {
            terminal,
            back: Buffer::empty(Rect::new(0, 0, size.width, size.height)),
            cursor: None,
            active: true,
        })
    }

    fn setup_terminal() -> io::Result<(Terminal<Backend>, Size)> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        let size = terminal.size()?;
        Ok((terminal, size))
    }

    fn cleanup_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }
}

impl Screen for CrosstermScreen {
    fn size(&self) -> (u16, u16) {
        (self.back.area.width, self.back.area.height)
    }

    fn clear(&mut self) {
        self.back.reset();
    }

    fn set_content(&mut self, x: u16, y: u16, base: char, combining: &[char], style: Style) {
        if let Some(cell) = self.back.cell_mut((x, y)) {
            cell.reset();
            if combining.is_empty() {
                cell.set_char(base);
            } else {
                let mut symbol = String::from(base);
                symbol.extend(combining);
                cell.set_symbol(&symbol);
            }
            cell.set_style(style);
        }
    }

    fn show_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }

    fn hide_cursor(&mut self) {
        self.cursor = None;
    }

    fn show(&mut self) -> Result<()> {
        let back = &self.back;
        let cursor = self.cursor;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buffer = frame.buffer_mut();
            for y in 0..area.height.min(back.area.height) {
                for x in 0..area.width.min(back.area.width) {
                    if let (Some(src), Some(dst)) = (back.cell((x, y)), buffer.cell_mut((x, y))) {
                        dst.clone_from(src);
                    }
                }
            }
            // Leaving the position unset makes ratatui hide the caret
            if let Some((x, y)) = cursor {
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<InputEvent> {
        loop {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            if let InputEvent::Resize { width, height } = input {
                debug!(width, height, "terminal resized");
                self.back.resize(Rect::new(0, 0, width, height));
            }
            return Ok(input);
        }
    }

    fn fini(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let left = Self::cleanup_terminal();
        let shown = self.terminal.show_cursor();
        info!("terminal restored");
        left?;
        shown?;
        Ok(())
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        if let Err(e) = self.fini() {
            warn!("terminal cleanup failed: {e}");
        }
    }
}
