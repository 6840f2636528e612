//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use csvgrid_core::Grid;

/// CSV reader producing a [`Grid`]
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV text into a grid
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a grid.
    ///
    /// The first record becomes the header row. Records with fewer fields
    /// than the header are padded with empty strings; extra fields are
    /// dropped.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }

        if rows.is_empty() {
            return Err(CsvError::Empty);
        }

        let grid = Grid::from_rows(rows);
        tracing::debug!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            "parsed CSV"
        );
        Ok(grid)
    }
}
