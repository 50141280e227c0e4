//! The resolved, fully unspanned table grid.

use crate::error::{TableError, TableResult};

/// A rectangular `rows x cols` grid of string cells.
///
/// Produced by the span resolver: every merged cell of the source table has
/// been expanded so that each grid position holds exactly one (possibly
/// empty) value. The grid owns its cells and has no identity beyond a
/// single table's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Create a grid prefilled with empty cells.
    pub(crate) fn filled(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![vec![String::new(); cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// One full row of cells, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.cells.get(row).map(Vec::as_slice)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Consume the grid into its row-major cell matrix.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: String) {
        self.cells[row][col] = value;
    }

    /// Split the grid into a header row plus owned data rows.
    ///
    /// `header_row` selects the row supplying column labels; data rows are
    /// every row strictly after it, rows before it are discarded. `None` or
    /// an out-of-bounds index falls back to synthetic `Col0..ColN-1` labels
    /// with every grid row as data. `override_headers`, when provided,
    /// replaces the derived labels and must match the column count.
    pub fn records(
        &self,
        header_row: Option<usize>,
        override_headers: Option<&[String]>,
    ) -> TableResult<(Vec<String>, Vec<Vec<String>>)> {
        if let Some(overrides) = override_headers
            && overrides.len() != self.cols
        {
            return Err(TableError::HeaderMismatch {
                expected: self.cols,
                actual: overrides.len(),
            });
        }

        let (derived, data_start) = match header_row {
            Some(h) if h < self.rows() => (self.cells[h].clone(), h + 1),
            _ => ((0..self.cols).map(|i| format!("Col{i}")).collect(), 0),
        };

        let headers = match override_headers {
            Some(overrides) => overrides.to_vec(),
            None => derived,
        };
        let data = self.cells[data_start..].to_vec();
        Ok((headers, data))
    }
}
