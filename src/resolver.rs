//! Span resolver: expands rowspan/colspan merged cells into a full grid.
//!
//! Markdown has no concept of merged cells, so every `rowspan x colspan`
//! cell is written into each grid position of its footprint. Placement runs
//! a column cursor per row that skips positions already claimed by a prior
//! row's vertical span; a later cell therefore never overwrites an
//! earlier-claimed position.

use scraper::ElementRef;
use tracing::debug;

use crate::dom;
use crate::error::{TableError, TableResult};
use crate::grid::Grid;

/// Resolve one table element into its unspanned rectangular grid.
///
/// Row count is the table's own `<tr>` count (header and body rows
/// flattened in document order). Column count comes from a `<colgroup>`
/// declaration when present, otherwise from the sum of the first row's
/// colspans. Resolution is deterministic: identical input HTML always
/// yields a bit-identical grid.
///
/// # Errors
///
/// `TableError::MalformedTable` when the table has zero rows or a zero
/// column count. Span footprints that would overflow the grid are clipped
/// at its bounds rather than treated as errors.
pub fn resolve(table: &ElementRef) -> TableResult<Grid> {
    let rows = dom::table_rows(table);
    if rows.is_empty() {
        return Err(TableError::malformed("table has zero rows"));
    }

    let cols = match dom::colgroup_columns(table) {
        Some(declared) => declared,
        None => dom::row_cells(&rows[0])
            .iter()
            .map(|cell| dom::span_attr(cell, "colspan"))
            .sum(),
    };
    if cols == 0 {
        return Err(TableError::malformed("table has zero columns"));
    }

    let total_rows = rows.len();
    let mut grid = Grid::filled(total_rows, cols);

    for (row_idx, row) in rows.iter().enumerate() {
        let mut col_idx = 0;

        for cell in dom::row_cells(row) {
            // Skip positions already written by a prior row's vertical span.
            while col_idx < cols
                && grid
                    .get(row_idx, col_idx)
                    .is_some_and(|value| !value.is_empty())
            {
                col_idx += 1;
            }
            if col_idx >= cols {
                debug!(row = row_idx, "row overfull, dropping excess cells");
                break;
            }

            let rowspan = dom::span_attr(&cell, "rowspan");
            let colspan = dom::span_attr(&cell, "colspan");
            let text = dom::normalized_text(&cell);

            if row_idx + rowspan > total_rows || col_idx + colspan > cols {
                debug!(
                    row = row_idx,
                    col = col_idx,
                    rowspan,
                    colspan,
                    "span footprint exceeds grid bounds, clipping"
                );
            }
            for dr in 0..rowspan.min(total_rows - row_idx) {
                for dc in 0..colspan.min(cols - col_idx) {
                    grid.set(row_idx + dr, col_idx + dc, text.clone());
                }
            }

            col_idx += colspan;
        }
    }

    Ok(grid)
}
