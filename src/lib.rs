//! HTML table unspanning: merged cells to rectangular grids to markdown.
//!
//! # Architecture
//!
//! The pipeline has three stages:
//!
//! 1. **Locate**: find every `<table>` in a parsed document, in document
//!    order, nested tables included ([`dom::locate_tables`]).
//! 2. **Resolve**: expand each table's `rowspan`/`colspan` merged cells
//!    into a fully rectangular [`Grid`] of string cells
//!    ([`resolver::resolve`]).
//! 3. **Render**: serialize a grid as padded markdown, compact markdown or
//!    delimited text ([`render_grid`]).
//!
//! [`TableUnspanner`] drives all three across a whole document.
//!
//! # Design
//!
//! Standard markdown has no merged cells, so a cell spanning `R x C`
//! positions is written into every position of its footprint. Resolution is
//! tolerant of real-world HTML: spans overflowing the grid are clipped,
//! excess cells in an overfull row are dropped, and garbage span attributes
//! fall back to 1. A table with zero rows or zero columns is the only
//! unresolvable input.
//!
//! All computation is pure, synchronous and deterministic; the crate does
//! no fetching, no I/O and no CSS-based layout.

pub mod batch;
pub mod dom;
pub mod error;
pub mod grid;
pub mod render;
pub mod resolver;

pub use batch::{TableOutcome, TableUnspanner};
pub use error::{TableError, TableResult};
pub use grid::Grid;
pub use render::{TableFormat, render_grid};
pub use resolver::resolve;
