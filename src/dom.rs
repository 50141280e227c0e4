//! Narrow capability layer over the HTML parse tree.
//!
//! Everything the resolver needs from the parsed document goes through this
//! module: locating tables, iterating a table's own rows and a row's own
//! cells, reading span attributes with defaults, and extracting normalized
//! cell text. Span and render logic never touch `scraper` directly, so the
//! parsing library can change without touching the algorithms.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded selector 'table' is statically valid")
});

static COL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("col").expect("BUG: hardcoded selector 'col' is statically valid")
});

/// Locate every `<table>` in the document, in document order.
///
/// Tables nested inside other tables' cells are discovered as their own
/// entries in addition to being text-flattened into the ancestor cell.
/// Returns an empty vec for documents without tables.
pub fn locate_tables(document: &Html) -> Vec<ElementRef<'_>> {
    document.select(&TABLE_SELECTOR).collect()
}

/// The table's own `<tr>` nodes in document order.
///
/// Direct `tr` children are taken as-is; `thead`/`tbody`/`tfoot` sections
/// are flattened into the same sequence. Rows of a nested table belong to
/// that table, not to this one, which is why this walks direct children
/// instead of selecting `tr` descendants.
pub fn table_rows<'a>(table: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    let mut rows = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => rows.extend(
                child
                    .children()
                    .filter_map(ElementRef::wrap)
                    .filter(|row| row.value().name() == "tr"),
            ),
            _ => {}
        }
    }
    rows
}

/// The row's own `<td>`/`<th>` cells in document order.
pub fn row_cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect()
}

/// Read a span attribute (`rowspan`/`colspan`) with the HTML default of 1.
///
/// Missing, unparsable and zero values all normalize to 1, matching
/// lenient-HTML-consumer expectations.
pub fn span_attr(cell: &ElementRef, name: &str) -> usize {
    cell.value()
        .attr(name)
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Declared column count from a direct `<colgroup>` child, if any.
pub fn colgroup_columns(table: &ElementRef) -> Option<usize> {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "colgroup")
        .map(|colgroup| colgroup.select(&COL_SELECTOR).count())
}

/// Extract the cell's text payload with canonical whitespace normalization:
/// descendant text nodes are joined with single spaces, every internal
/// whitespace run (newlines and NBSP included) collapses to one space, and
/// the result is trimmed.
pub fn normalized_text(cell: &ElementRef) -> String {
    let joined = cell.text().collect::<Vec<_>>().join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
