//! # csvgrid-csv
//!
//! CSV import and export for csvgrid.
//!
//! [`parse_csv`] turns CSV text into a rectangular [`Grid`] whose first row is
//! the header record; [`serialize_csv`] is the inverse.
//!
//! ```rust
//! use csvgrid_csv::{parse_csv, serialize_csv};
//!
//! let grid = parse_csv("a,b\n1\n").unwrap();
//! assert_eq!(grid.cell(1, 1), Some(""));
//! assert_eq!(serialize_csv(&grid).unwrap(), "a,b\r\n1,\r\n");
//! ```

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;

use csvgrid_core::Grid;

/// Parse CSV text with default options
pub fn parse_csv(text: &str) -> CsvResult<Grid> {
    CsvReader::read_str(text, &CsvReadOptions::default())
}

/// Serialize a grid to CSV text with default options
pub fn serialize_csv(grid: &Grid) -> CsvResult<String> {
    CsvWriter::write_string(grid, &CsvWriteOptions::default())
}
