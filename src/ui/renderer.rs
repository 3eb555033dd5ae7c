//! Section composition
//!
//! The [`Renderer`] owns a [`Screen`] and an ordered list of sections.
//! Sections are painted in list order, so a later section covers an earlier
//! one wherever they overlap.

use super::error::Result;
use super::screen::Screen;
use super::section::Section;

/// Ordered sections painted onto one screen
#[derive(Debug)]
pub struct Renderer<S> {
    sections: Vec<Section>,
    screen: S,
}

impl<S: Screen> Renderer<S> {
    /// Create a renderer with no sections
    pub const fn new(screen: S) -> Self {
        Self {
            sections: Vec::new(),
            screen,
        }
    }

    /// Insert `section` at `index`, or at the end if `index` is past it
    pub fn insert_at(&mut self, index: usize, section: Section) -> &mut Self {
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
        self
    }

    /// All sections in paint order
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section at `index`
    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// Mutable section at `index`
    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Usable size: the device size minus one column and one row
    ///
    /// Some terminals scroll when the bottom-right cell is written, so the
    /// last column and row are never handed out.
    #[must_use]
    pub fn size(&self) -> (u16, u16) {
        let (width, height) = self.screen.size();
        (width.saturating_sub(1), height.saturating_sub(1))
    }

    /// Paint every section, then flush the screen once
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the screen fails.
    pub fn draw(&mut self) -> Result<()> {
        self.screen.hide_cursor();
        for section in &self.sections {
            section.draw(&mut self.screen);
        }
        self.screen.show()
    }

    /// The underlying screen
    pub const fn screen(&self) -> &S {
        &self.screen
    }

    /// The underlying screen, mutably
    pub const fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    /// Give the screen back
    pub fn into_screen(self) -> S {
        self.screen
    }
}
