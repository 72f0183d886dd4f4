//! One line of cells joined by fixed spacing

use crate::cell::Cell;
use crate::error::{AligntabError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    spacing: usize,
}

impl Row {
    /// Create a row with one cell per entry of `min_widths`
    pub fn new(min_widths: &[usize], spacing: usize) -> Self {
        Self {
            cells: min_widths.iter().map(|&w| Cell::new(w)).collect(),
            spacing,
        }
    }

    /// Write `value` into the cell at `column`
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::ColumnOutOfRange`] if `column` is not a valid index.
    pub fn write(&mut self, value: &str, column: usize) -> Result<()> {
        let columns = self.cells.len();
        let cell = self
            .cells
            .get_mut(column)
            .ok_or(AligntabError::ColumnOutOfRange { column, columns })?;
        cell.write(value);
        Ok(())
    }

    /// Widen every cell narrower than its target in `widths`
    ///
    /// Cells already at or beyond their target are left alone, so applying the
    /// same vector twice changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::ArityMismatch`] if `widths` does not have one
    /// entry per cell. Nothing is widened in that case.
    pub fn widen_columns(&mut self, widths: &[usize]) -> Result<()> {
        if widths.len() != self.cells.len() {
            return Err(AligntabError::ArityMismatch {
                expected: self.cells.len(),
                found: widths.len(),
            });
        }

        for (cell, &target) in self.cells.iter_mut().zip(widths) {
            if target > cell.width() {
                cell.widen(target)?;
            }
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        let spacer = " ".repeat(self.spacing);
        self.cells
            .iter()
            .map(Cell::render)
            .collect::<Vec<_>>()
            .join(&spacer)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current display width of each cell
    pub fn widths(&self) -> Vec<usize> {
        self.cells.iter().map(Cell::width).collect()
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
