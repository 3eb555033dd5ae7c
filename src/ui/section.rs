//! Bordered text regions
//!
//! A [`Section`] is a rectangle with a single-line border, a stack of text
//! lines and an optional cursor. The border sits on the start and end
//! rows/columns; content and cursors live strictly inside.
//!
//! Content is drawn bottom-up: the first line lands on the row just above
//! the bottom border and later lines stack towards the top. Lines that do
//! not fit are dropped, there is no scrolling.

use super::glyph::Glyph;
use super::screen::Screen;
use ratatui::style::Style;

/// Column offset of content lines from the section's left edge
pub const CONTENT_INDENT: u16 = 3;

/// Default glyph painted at a selection cursor
pub const DEFAULT_MARKER: char = '>';

const HLINE: char = '─';
const VLINE: char = '│';
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';

/// How a cursor is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    /// Hardware caret, used for text input
    Typing,
    /// Marker glyph, used to highlight a list row
    Selection,
}

/// Cursor position and display kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Column
    pub x: u16,
    /// Row
    pub y: u16,
    /// Display kind
    pub kind: CursorKind,
}

impl Cursor {
    /// Create a cursor
    #[must_use]
    pub const fn new(x: u16, y: u16, kind: CursorKind) -> Self {
        Self { x, y, kind }
    }
}

/// Section bounds, inclusive on both ends (the border rows/columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    /// Left border column
    pub start_x: u16,
    /// Top border row
    pub start_y: u16,
    /// Right border column
    pub end_x: u16,
    /// Bottom border row
    pub end_y: u16,
}

impl Bounds {
    /// Create bounds, swapping reversed coordinates so start <= end
    #[must_use]
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self {
            start_x: x1.min(x2),
            start_y: y1.min(y2),
            end_x: x1.max(x2),
            end_y: y1.max(y2),
        }
    }

    /// Interior as `(left, top, right, bottom)`, inclusive
    ///
    /// `None` when the border leaves no room inside.
    #[must_use]
    pub fn interior(&self) -> Option<(u16, u16, u16, u16)> {
        if self.end_x - self.start_x < 2 || self.end_y - self.start_y < 2 {
            return None;
        }
        Some((
            self.start_x + 1,
            self.start_y + 1,
            self.end_x - 1,
            self.end_y - 1,
        ))
    }

    fn contains_interior(&self, x: u16, y: u16) -> bool {
        x > self.start_x && x < self.end_x && y > self.start_y && y < self.end_y
    }
}

/// A bordered, styled, bottom-anchored text region
#[derive(Debug, Clone, Default)]
pub struct Section {
    bounds: Bounds,
    content: Vec<String>,
    cursor: Option<Cursor>,
    text_style: Style,
    border_style: Style,
    marker: Option<char>,
}

impl Section {
    /// Create an empty section covering the given rectangle
    #[must_use]
    pub fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self {
            bounds: Bounds::new(x1, y1, x2, y2),
            ..Self::default()
        }
    }

    /// Set the text style
    #[must_use]
    pub const fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Set the border style
    #[must_use]
    pub const fn with_border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the glyph painted at a selection cursor
    #[must_use]
    pub const fn with_marker(mut self, marker: char) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Current bounds
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Move the section; content and cursor are left untouched
    pub fn resize(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) {
        self.bounds = Bounds::new(x1, y1, x2, y2);
    }

    /// Content lines, first line drawn at the bottom
    #[must_use]
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Replace all content lines
    pub fn set_content(&mut self, lines: Vec<String>) {
        self.content = lines;
    }

    /// Append one content line
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    /// Current cursor, if any
    #[must_use]
    pub const fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    /// Place or replace the cursor
    pub const fn set_cursor(&mut self, x: u16, y: u16, kind: CursorKind) {
        self.cursor = Some(Cursor::new(x, y, kind));
    }

    /// Remove the cursor
    pub const fn clear_cursor(&mut self) {
        self.cursor = None;
    }

    /// Move the cursor up, stopping at the top interior row
    pub fn move_cursor_up(&mut self, n: u16) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.y = cursor.y.saturating_sub(n);
        }
        self.clamp_cursor();
    }

    /// Move the cursor down, stopping at the bottom interior row
    pub fn move_cursor_down(&mut self, n: u16) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.y = cursor.y.saturating_add(n);
        }
        self.clamp_cursor();
    }

    /// Move the cursor left, stopping at the left interior column
    pub fn move_cursor_left(&mut self, n: u16) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.x = cursor.x.saturating_sub(n);
        }
        self.clamp_cursor();
    }

    /// Move the cursor right, stopping at the right interior column
    pub fn move_cursor_right(&mut self, n: u16) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.x = cursor.x.saturating_add(n);
        }
        self.clamp_cursor();
    }

    /// Snap the cursor to the nearest interior cell
    ///
    /// Call after [`resize`](Self::resize). A section without an interior
    /// pins the cursor just inside its top-left corner.
    pub fn clamp_cursor(&mut self) {
        let Some(cursor) = self.cursor.as_mut() else {
            return;
        };
        let (left, top, right, bottom) = self.bounds.interior().unwrap_or((
            self.bounds.start_x.saturating_add(1),
            self.bounds.start_y.saturating_add(1),
            self.bounds.start_x.saturating_add(1),
            self.bounds.start_y.saturating_add(1),
        ));
        cursor.x = cursor.x.clamp(left, right);
        cursor.y = cursor.y.clamp(top, bottom);
    }

    /// Paint the section onto `screen`
    pub fn draw<S: Screen + ?Sized>(&self, screen: &mut S) {
        self.draw_box(screen);

        let Bounds { start_x, end_y, .. } = self.bounds;
        for (i, line) in self.content.iter().enumerate() {
            let Some(y) = u16::try_from(i)
                .ok()
                .and_then(|i| end_y.checked_sub(i))
                .and_then(|y| y.checked_sub(1))
            else {
                break;
            };
            if y <= self.bounds.start_y {
                break;
            }
            self.emit_str(screen, start_x.saturating_add(CONTENT_INDENT), y, line);
        }

        if let Some(cursor) = self.cursor {
            match cursor.kind {
                CursorKind::Typing => screen.show_cursor(cursor.x, cursor.y),
                CursorKind::Selection => {
                    let marker = self.marker.unwrap_or(DEFAULT_MARKER);
                    let mut buf = [0u8; 4];
                    self.emit_str(screen, cursor.x, cursor.y, marker.encode_utf8(&mut buf));
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, dropping cells outside the interior
    fn emit_str<S: Screen + ?Sized>(&self, screen: &mut S, mut x: u16, y: u16, text: &str) {
        if y <= self.bounds.start_y || y >= self.bounds.end_y {
            return;
        }
        for c in text.chars() {
            let glyph = Glyph::from_char(c);
            // A glyph must fit whole before the right border
            if x.saturating_add(glyph.width) > self.bounds.end_x {
                break;
            }
            if self.bounds.contains_interior(x, y) {
                screen.set_content(x, y, glyph.base, glyph.combining(), self.text_style);
            }
            x = x.saturating_add(glyph.width);
        }
    }

    /// Fill the rectangle and draw its border
    fn draw_box<S: Screen + ?Sized>(&self, screen: &mut S) {
        let Bounds {
            start_x: x1,
            start_y: y1,
            end_x: x2,
            end_y: y2,
        } = self.bounds;
        let style = self.border_style;

        for row in y1..=y2 {
            for col in x1..=x2 {
                screen.set_content(col, row, ' ', &[], style);
            }
        }

        for col in x1..=x2 {
            screen.set_content(col, y1, HLINE, &[], style);
            screen.set_content(col, y2, HLINE, &[], style);
        }
        for row in y1.saturating_add(1)..y2 {
            screen.set_content(x1, row, VLINE, &[], style);
            screen.set_content(x2, row, VLINE, &[], style);
        }

        if x1 != x2 && y1 != y2 {
            screen.set_content(x1, y1, TOP_LEFT, &[], style);
            screen.set_content(x2, y1, TOP_RIGHT, &[], style);
            screen.set_content(x1, y2, BOTTOM_LEFT, &[], style);
            screen.set_content(x2, y2, BOTTOM_RIGHT, &[], style);
        }
    }
}
