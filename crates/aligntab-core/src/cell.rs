//! Single padded text value
//!
//! A cell stores its text already padded with trailing spaces. Width is the
//! terminal display width of that text, so wide glyphs count as two columns.

use crate::error::{AligntabError, Result};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal columns
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// A text value that is never narrower than its minimum width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    text: String,
    min_width: usize,
}

impl Cell {
    pub fn new(min_width: usize) -> Self {
        Self {
            text: String::new(),
            min_width,
        }
    }

    /// Replace the text, padding it up to the minimum width
    pub fn write(&mut self, value: &str) {
        self.text.clear();
        self.text.push_str(value);
        self.pad_to(self.min_width);
    }

    /// Pad the text with trailing spaces until it is `target` columns wide
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::CellShrink`] if `target` is narrower than the
    /// current text. The text is left untouched in that case.
    pub fn widen(&mut self, target: usize) -> Result<()> {
        let current = self.width();
        if target < current {
            return Err(AligntabError::CellShrink { current, target });
        }
        self.pad_to(target);
        Ok(())
    }

    pub fn render(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    pub fn min_width(&self) -> usize {
        self.min_width
    }

    fn pad_to(&mut self, target: usize) {
        let width = self.width();
        if width < target {
            self.text.extend(std::iter::repeat_n(' ', target - width));
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
