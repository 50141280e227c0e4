//! Document-level driver: locate, resolve and render every table.

use scraper::Html;
use tracing::warn;

use crate::dom;
use crate::error::{TableError, TableResult};
use crate::grid::Grid;
use crate::render::{self, TableFormat};
use crate::resolver;

/// Per-table outcome of a batch render.
///
/// `index` is the 0-based document-order position of the table. A failed
/// table carries its error here; it never aborts the other tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOutcome {
    pub index: usize,
    pub rendered: TableResult<String>,
}

/// Unspans every table of one HTML document.
///
/// Parses the document once and resolves each table fresh per request; no
/// grid is cached and no state is shared between table resolutions.
///
/// ```
/// use table_unspan::{TableFormat, TableUnspanner};
///
/// let unspanner = TableUnspanner::from_html(
///     "<table><tr><td colspan='2'>Total</td></tr><tr><td>A</td><td>B</td></tr></table>",
/// );
/// let markdown = unspanner
///     .render_table(0, Some(0), &TableFormat::CompactMarkdown, None)
///     .unwrap();
/// assert_eq!(markdown, "|Total|Total|\n|:---|:---|\n|A|B|");
/// ```
pub struct TableUnspanner {
    document: Html,
}

impl TableUnspanner {
    /// Parse raw HTML text (UTF-8).
    pub fn from_html(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Number of tables in the document, nested tables included.
    pub fn table_count(&self) -> usize {
        dom::locate_tables(&self.document).len()
    }

    /// Resolve the table at `index` (0-based, document order).
    ///
    /// # Errors
    ///
    /// `TableError::IndexOutOfRange` when `index` exceeds the located
    /// tables; `TableError::MalformedTable` from resolution.
    pub fn grid(&self, index: usize) -> TableResult<Grid> {
        let tables = dom::locate_tables(&self.document);
        let table = tables.get(index).ok_or(TableError::IndexOutOfRange {
            index,
            count: tables.len(),
        })?;
        resolver::resolve(table)
    }

    /// Resolve every table independently, in document order.
    pub fn grids(&self) -> Vec<TableResult<Grid>> {
        dom::locate_tables(&self.document)
            .iter()
            .map(resolver::resolve)
            .collect()
    }

    /// Resolve and render the table at `index`.
    pub fn render_table(
        &self,
        index: usize,
        header_row: Option<usize>,
        format: &TableFormat,
        override_headers: Option<&[String]>,
    ) -> TableResult<String> {
        let grid = self.grid(index)?;
        render::render_grid(&grid, header_row, format, override_headers)
    }

    /// Render every table, collecting per-table outcomes in document order.
    ///
    /// A table that fails to resolve is warn-logged and reported in its
    /// outcome; the remaining tables are still processed.
    pub fn render_all(&self, header_row: Option<usize>, format: &TableFormat) -> Vec<TableOutcome> {
        dom::locate_tables(&self.document)
            .iter()
            .enumerate()
            .map(|(index, table)| {
                let rendered = resolver::resolve(table)
                    .and_then(|grid| render::render_grid(&grid, header_row, format, None));
                if let Err(error) = &rendered {
                    warn!(table = index, %error, "skipping unrenderable table");
                }
                TableOutcome { index, rendered }
            })
            .collect()
    }

    /// Render the whole document as labeled blocks.
    ///
    /// Each table becomes `Table <n>:` (1-based) followed by its rendered
    /// body and a blank separator; a failed table contributes its error
    /// message as the block body so no failure is silently dropped.
    pub fn render_document(&self, header_row: Option<usize>, format: &TableFormat) -> String {
        let mut output = String::new();
        for outcome in self.render_all(header_row, format) {
            let body = match outcome.rendered {
                Ok(rendered) => rendered,
                Err(error) => error.to_string(),
            };
            output.push_str(&format!("Table {}:\n{}\n\n\n\n", outcome.index + 1, body));
        }
        output
    }
}
