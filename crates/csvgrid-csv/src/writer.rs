//! CSV writer

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvWriteOptions;
use csvgrid_core::Grid;

/// CSV writer for a [`Grid`]
pub struct CsvWriter;

impl CsvWriter {
    /// Write a grid to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to CSV text
    pub fn write_string(grid: &Grid, options: &CsvWriteOptions) -> CsvResult<String> {
        let mut buf = Vec::new();
        Self::write(grid, &mut buf, options)?;
        String::from_utf8(buf).map_err(|e| CsvError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write a grid to a writer, header row first
    pub fn write<W: Write>(grid: &Grid, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(options.line_terminator.to_csv())
            .from_writer(writer);

        for row in grid.rows() {
            csv_writer.write_record(row)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LineTerminator;
    use crate::reader::CsvReader;
    use crate::CsvReadOptions;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_write_string() {
        let g = grid(&[&["a", "b"], &["1", ""]]);
        let text = CsvWriter::write_string(&g, &CsvWriteOptions::default()).unwrap();
        assert_eq!(text, "a,b\r\n1,\r\n");
    }

    #[test]
    fn test_write_quotes_when_needed() {
        let g = grid(&[&["a", "b"], &["x, y", "say \"hi\""]]);
        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..Default::default()
        };
        let text = CsvWriter::write_string(&g, &options).unwrap();
        assert_eq!(text, "a,b\n\"x, y\",\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_write_empty_grid() {
        let text = CsvWriter::write_string(&Grid::new(), &CsvWriteOptions::default()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_embedded_delimiters_survive_round_trip() {
        let g = grid(&[&["note", "n"], &["line one\nline two", "a,b"]]);
        let text = CsvWriter::write_string(&g, &CsvWriteOptions::default()).unwrap();
        let back = CsvReader::read_str(&text, &CsvReadOptions::default()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let g = grid(&[&["a"], &["1"]]);

        CsvWriter::write_file(&g, &path, &CsvWriteOptions::default()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\r\n1\r\n");
    }
}
