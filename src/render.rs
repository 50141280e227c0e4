//! Renderers that serialize a resolved grid into text.
//!
//! Three formats are supported:
//!
//! - **Padded markdown**: pipe table with cells padded to per-column width,
//!   human-friendly alignment.
//! - **Compact markdown**: pipe table with every internal space stripped
//!   from cell text and `:---` left-align separators, byte-stable for
//!   downstream consumers.
//! - **Delimited text**: header and data rows joined with a caller-chosen
//!   delimiter, one row per line. Embedded delimiters are not escaped;
//!   this output targets markdown-adjacent tooling, not robust CSV.

use crate::error::TableResult;
use crate::grid::Grid;

/// Output format for a resolved grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableFormat {
    /// Pipe-delimited markdown with visual column alignment.
    PaddedMarkdown,
    /// Pipe-delimited markdown with all internal spaces stripped.
    CompactMarkdown,
    /// Rows joined with the given field delimiter, one per line.
    Delimited { delimiter: char },
}

/// Render a grid with the given header selection and format.
///
/// `header_row` picks the grid row supplying column labels; rows before it
/// are discarded and rows after it become data. `None` or an out-of-bounds
/// index falls back to synthetic `Col0..ColN-1` labels with every row as
/// data. `override_headers` replaces the derived labels and must match the
/// grid's column count.
///
/// # Errors
///
/// `TableError::HeaderMismatch` when `override_headers` is provided with a
/// length other than `grid.cols()`.
pub fn render_grid(
    grid: &Grid,
    header_row: Option<usize>,
    format: &TableFormat,
    override_headers: Option<&[String]>,
) -> TableResult<String> {
    let (headers, data) = grid.records(header_row, override_headers)?;
    Ok(match format {
        TableFormat::PaddedMarkdown => padded_markdown(&headers, &data),
        TableFormat::CompactMarkdown => compact_markdown(&headers, &data),
        TableFormat::Delimited { delimiter } => delimited(&headers, &data, *delimiter),
    })
}

/// Escape cell text for markdown pipe tables.
///
/// A literal `|` would split the cell, so it is emitted as its entity.
fn escape_markdown_cell(cell: &str) -> String {
    cell.replace('|', "&#124;")
}

fn padded_markdown(headers: &[String], data: &[Vec<String>]) -> String {
    let escaped_headers: Vec<String> = headers.iter().map(|h| escape_markdown_cell(h)).collect();
    let escaped_data: Vec<Vec<String>> = data
        .iter()
        .map(|row| row.iter().map(|c| escape_markdown_cell(c)).collect())
        .collect();

    let widths = column_widths(&escaped_headers, &escaped_data);

    let mut lines = Vec::with_capacity(escaped_data.len() + 2);
    lines.push(format_row_padded(&escaped_headers, &widths));
    lines.push(format_separator_padded(&widths));
    for row in &escaped_data {
        lines.push(format_row_padded(row, &widths));
    }
    lines.join("\n")
}

fn compact_markdown(headers: &[String], data: &[Vec<String>]) -> String {
    let compact = |cell: &String| escape_markdown_cell(cell).replace(' ', "");

    let mut lines = Vec::with_capacity(data.len() + 2);
    lines.push(format!(
        "|{}|",
        headers.iter().map(compact).collect::<Vec<_>>().join("|")
    ));
    lines.push(format!(
        "|{}|",
        headers.iter().map(|_| ":---").collect::<Vec<_>>().join("|")
    ));
    for row in data {
        lines.push(format!(
            "|{}|",
            row.iter().map(compact).collect::<Vec<_>>().join("|")
        ));
    }
    lines.join("\n")
}

fn delimited(headers: &[String], data: &[Vec<String>], delimiter: char) -> String {
    let sep = delimiter.to_string();
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(headers.join(&sep));
    for row in data {
        lines.push(row.join(&sep));
    }
    lines.join("\n")
}

/// Per-column display width in characters, never below the 3 the `---`
/// separator needs.
fn column_widths(headers: &[String], data: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in data {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for width in &mut widths {
        *width = (*width).max(3);
    }
    widths
}

fn format_row_padded(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or_default();
        let pad = width.saturating_sub(cell.chars().count());
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad));
        line.push_str(" |");
    }
    line
}

fn format_separator_padded(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push(' ');
        line.push_str(&"-".repeat(*width));
        line.push_str(" |");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use crate::{dom, resolver};
    use scraper::Html;

    fn grid_from(html: &str) -> Grid {
        let document = Html::parse_document(html);
        let tables = dom::locate_tables(&document);
        resolver::resolve(&tables[0]).expect("well-formed table")
    }

    #[test]
    fn compact_markdown_matches_expected_bytes() {
        let grid = grid_from(
            "<table>\
             <tr><td colspan='2'>Total</td></tr>\
             <tr><td>A</td><td>B</td></tr>\
             </table>",
        );
        let rendered = render_grid(&grid, Some(0), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(rendered, "|Total|Total|\n|:---|:---|\n|A|B|");
    }

    #[test]
    fn compact_markdown_strips_internal_spaces() {
        let grid = grid_from(
            "<table>\
             <tr><th>Unit Price</th><th>Per Month</th></tr>\
             <tr><td>12 000</td><td>1 474 yen</td></tr>\
             </table>",
        );
        let rendered = render_grid(&grid, Some(0), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(rendered, "|UnitPrice|PerMonth|\n|:---|:---|\n|12000|1474yen|");
    }

    #[test]
    fn compact_markdown_is_idempotent_on_the_same_grid() {
        let grid = grid_from(
            "<table><tr><th>a b</th><th>c</th></tr><tr><td>d e</td><td>f</td></tr></table>",
        );
        let first = render_grid(&grid, Some(0), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        let second = render_grid(&grid, Some(0), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(first, second);
    }

    #[test]
    fn markdown_outputs_have_header_separator_and_data_lines() {
        let grid = grid_from(
            "<table>\
             <tr><th>h1</th><th>h2</th></tr>\
             <tr><td>a</td><td>b</td></tr>\
             <tr><td>c</td><td>d</td></tr>\
             <tr><td>e</td><td>f</td></tr>\
             </table>",
        );
        for format in [TableFormat::PaddedMarkdown, TableFormat::CompactMarkdown] {
            let rendered =
                render_grid(&grid, Some(0), &format, None).expect("render succeeds");
            // 1 header row + 3 data rows -> header + separator + 3 lines
            assert_eq!(rendered.lines().count(), 5, "format {format:?}");
        }
    }

    #[test]
    fn padded_markdown_aligns_columns() {
        let grid = grid_from(
            "<table>\
             <tr><th>Name</th><th>N</th></tr>\
             <tr><td>Alice</td><td>3</td></tr>\
             </table>",
        );
        let rendered = render_grid(&grid, Some(0), &TableFormat::PaddedMarkdown, None)
            .expect("render succeeds");
        assert_eq!(
            rendered,
            "| Name  | N   |\n| ----- | --- |\n| Alice | 3   |"
        );
    }

    #[test]
    fn synthetic_headers_when_header_row_out_of_bounds() {
        let grid = grid_from(
            "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>",
        );
        let rendered = render_grid(&grid, Some(7), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(rendered, "|Col0|Col1|\n|:---|:---|\n|a|b|\n|c|d|");
    }

    #[test]
    fn override_headers_replace_the_header_row() {
        let grid = grid_from(
            "<table><tr><th>old1</th><th>old2</th></tr><tr><td>a</td><td>b</td></tr></table>",
        );
        let overrides = vec!["new1".to_string(), "new2".to_string()];
        let rendered = render_grid(
            &grid,
            Some(0),
            &TableFormat::CompactMarkdown,
            Some(&overrides),
        )
        .expect("render succeeds");
        assert_eq!(rendered, "|new1|new2|\n|:---|:---|\n|a|b|");
    }

    #[test]
    fn override_header_mismatch_surfaces_at_render_time() {
        let grid = grid_from(
            "<table><tr><th>h1</th><th>h2</th></tr><tr><td>a</td><td>b</td></tr></table>",
        );
        let overrides = vec!["lonely".to_string()];
        let err = render_grid(
            &grid,
            Some(0),
            &TableFormat::CompactMarkdown,
            Some(&overrides),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::HeaderMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn literal_pipes_are_escaped_in_markdown() {
        let grid = grid_from(
            "<table><tr><th>a|b</th><th>h</th></tr><tr><td>c|d</td><td>x</td></tr></table>",
        );
        let rendered = render_grid(&grid, Some(0), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(rendered, "|a&#124;b|h|\n|:---|:---|\n|c&#124;d|x|");
    }

    #[test]
    fn delimited_output_joins_rows_with_the_delimiter() {
        let grid = grid_from(
            "<table>\
             <tr><th>h1</th><th>h2</th></tr>\
             <tr><td>a</td><td>b</td></tr>\
             </table>",
        );
        let comma = render_grid(
            &grid,
            Some(0),
            &TableFormat::Delimited { delimiter: ',' },
            None,
        )
        .expect("render succeeds");
        assert_eq!(comma, "h1,h2\na,b");

        let tab = render_grid(
            &grid,
            Some(0),
            &TableFormat::Delimited { delimiter: '\t' },
            None,
        )
        .expect("render succeeds");
        assert_eq!(tab, "h1\th2\na\tb");
    }

    #[test]
    fn rows_before_the_header_row_are_discarded() {
        let grid = grid_from(
            "<table>\
             <tr><td>preamble</td><td>stuff</td></tr>\
             <tr><th>h1</th><th>h2</th></tr>\
             <tr><td>a</td><td>b</td></tr>\
             </table>",
        );
        let rendered = render_grid(&grid, Some(1), &TableFormat::CompactMarkdown, None)
            .expect("render succeeds");
        assert_eq!(rendered, "|h1|h2|\n|:---|:---|\n|a|b|");
    }
}
