//! Column-aligned table
//!
//! Each column keeps a watermark: the widest value ever written to it. New
//! rows are created with the current watermarks as minimum widths. When a
//! line raises any watermark, every earlier row is widened once so that all
//! column boundaries stay at the same offset.

use crate::config::TableConfig;
use crate::error::{AligntabError, Result};
use crate::row::Row;
use log::{debug, trace};
use std::fmt;

pub const DEFAULT_SPACING: usize = 2;

#[derive(Debug, Clone)]
pub struct Table {
    columns: usize,
    spacing: usize,
    rows: Vec<Row>,
    column_widths: Vec<usize>,
    header: String,
    footer: String,
}

impl Table {
    /// Create an empty table
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::NoColumns`] if `columns` is zero.
    pub fn new(columns: usize, spacing: usize) -> Result<Self> {
        if columns == 0 {
            return Err(AligntabError::NoColumns);
        }
        Ok(Self {
            columns,
            spacing,
            rows: Vec::new(),
            column_widths: vec![0; columns],
            header: String::new(),
            footer: String::new(),
        })
    }

    /// Create a table from the `[table]` section of a config
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let table = Self::new(config.table.columns, config.table.spacing)?
            .with_header(config.table.header.clone())
            .with_footer(config.table.footer.clone());
        Ok(table)
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn set_header(&mut self, header: impl Into<String>) {
        self.header = header.into();
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    /// Append one line of exactly `columns` values
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::ArityMismatch`] if the number of values differs
    /// from the column count. The table is not modified in that case.
    pub fn write_line<S: AsRef<str>>(&mut self, values: &[S]) -> Result<()> {
        self.check_arity(values.len())?;

        let mut row = Row::new(&self.column_widths, self.spacing);
        let mut raised = Vec::new();
        for (column, value) in values.iter().enumerate() {
            let value = value.as_ref();
            row.write(value, column)?;

            let width = crate::cell::display_width(value);
            if width > self.column_widths[column] {
                self.column_widths[column] = width;
                raised.push(column);
            }
        }
        self.rows.push(row);
        trace!("wrote line {} ({} columns)", self.rows.len(), self.columns);

        if !raised.is_empty() {
            self.realign(&raised)?;
        }
        Ok(())
    }

    /// Write a row of column names followed by a dash underline per name
    ///
    /// # Errors
    ///
    /// Returns [`AligntabError::ArityMismatch`] before writing anything if the
    /// number of names differs from the column count.
    pub fn add_label<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        self.check_arity(names.len())?;

        let underline: Vec<String> = names
            .iter()
            .map(|name| "-".repeat(crate::cell::display_width(name.as_ref())))
            .collect();

        self.write_line(names)?;
        self.write_line(&underline)
    }

    /// Write several lines in order, stopping at the first rejected one
    ///
    /// Lines written before the failure stay in the table. The error carries
    /// the 1-based position of the rejected line within `lines`.
    pub fn extend_lines<L, S>(&mut self, lines: L) -> Result<()>
    where
        L: IntoIterator,
        L::Item: AsRef<[S]>,
        S: AsRef<str>,
    {
        for (index, line) in lines.into_iter().enumerate() {
            self.write_line(line.as_ref())
                .map_err(|e| e.at_line(index + 1))?;
        }
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut output = String::new();
        if !self.header.is_empty() {
            output.push_str(&self.header);
            output.push('\n');
        }
        for row in &self.rows {
            output.push_str(&row.render());
            output.push('\n');
        }
        output.push_str(&self.footer);
        output
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn spacing(&self) -> usize {
        self.spacing
    }

    /// Widest value written so far in each column
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    fn check_arity(&self, found: usize) -> Result<()> {
        if found != self.columns {
            return Err(AligntabError::ArityMismatch {
                expected: self.columns,
                found,
            });
        }
        Ok(())
    }

    /// Widen every row but the newest to the current watermarks
    fn realign(&mut self, raised: &[usize]) -> Result<()> {
        let Some((_, earlier)) = self.rows.split_last_mut() else {
            return Ok(());
        };
        debug!(
            "columns {:?} widened to {:?}, realigning {} rows",
            raised,
            self.column_widths,
            earlier.len()
        );
        for row in earlier {
            row.widen_columns(&self.column_widths)?;
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests;
