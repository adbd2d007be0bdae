// src/table.rs
use crate::error::{Result, ScrapeError};

/// Header plus equal-width rows. The unit every renderer consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(header: Vec<String>) -> Self {
        Self { header, rows: Vec::new() }
    }

    pub fn header(&self) -> &[String] { &self.header }
    pub fn rows(&self) -> &[Vec<String>] { &self.rows }
    pub fn width(&self) -> usize { self.header.len() }

    /// Header + body rows, i.e. what `records()` yields.
    pub fn record_count(&self) -> usize { self.rows.len() + 1 }
    /// No body rows.
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Table whose width is fixed by the type, so no row can be ragged.
    pub fn from_fixed<const N: usize>(
        header: [String; N],
        rows: impl IntoIterator<Item = [String; N]>,
    ) -> Self {
        Self {
            header: header.to_vec(),
            rows: rows.into_iter().map(|r| r.to_vec()).collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.width() {
            return Err(ScrapeError::RowWidth { expected: self.width(), found: row.len() });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Header first, then rows, in table order.
    pub fn records(&self) -> impl Iterator<Item = &[String]> {
        std::iter::once(self.header.as_slice()).chain(self.rows.iter().map(Vec::as_slice))
    }
}
