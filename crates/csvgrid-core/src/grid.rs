//! Grid type
//!
//! A [`Grid`] is a rectangular matrix of text cells. Row 0 is the header row
//! and holds the column names; every other row is a data row with the same
//! number of cells.
//!
//! Structural operations follow value semantics: they borrow the current grid
//! and return a new one, leaving the input untouched.

use crate::error::{Error, Result};

/// A rectangular table of string cells with a header row at index 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")
)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid (no header, no data rows)
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a grid from raw rows.
    ///
    /// The first row is the header and fixes the column count. Shorter rows
    /// are padded with empty strings, longer rows are truncated.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.first().map(Vec::len).unwrap_or(0);

        for (index, row) in rows.iter_mut().enumerate().skip(1) {
            if row.len() != width {
                tracing::warn!(
                    row = index,
                    fields = row.len(),
                    columns = width,
                    "normalizing ragged row to header width"
                );
                row.resize(width, String::new());
            }
        }

        Self { rows }
    }

    /// Create a grid with a header row and no data rows
    pub fn with_header<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: vec![header.into_iter().map(Into::into).collect()],
        }
    }

    // === Accessors ===

    /// Number of rows, header included
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (width of the header row)
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Check if the grid has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the header row (column names)
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get a cell value by row and column indices
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Data rows (everything after the header)
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Consume the grid and return its rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    // === Cell Modification ===

    /// Replace a single cell value
    pub fn update_cell<S: Into<String>>(&self, row: usize, col: usize, value: S) -> Result<Grid> {
        self.check_row(row)?;
        self.check_column(col)?;

        let mut next = self.clone();
        next.rows[row][col] = value.into();
        Ok(next)
    }

    // === Row Operations ===

    /// Remove a data row, shifting later rows up.
    ///
    /// Deleting the header row (index 0) is a no-op.
    pub fn delete_row(&self, row: usize) -> Result<Grid> {
        if row == 0 {
            tracing::debug!("ignoring delete of header row");
            return Ok(self.clone());
        }
        self.check_row(row)?;

        let mut next = self.clone();
        next.rows.remove(row);
        Ok(next)
    }

    /// Insert an empty row at `row`, pushing the current row down.
    ///
    /// Inserting above the header is a no-op so the header stays at row 0.
    pub fn insert_row_above(&self, row: usize) -> Result<Grid> {
        if row == 0 {
            tracing::debug!("ignoring insert above header row");
            return Ok(self.clone());
        }
        self.insert_row_at(row)
    }

    /// Insert an empty row directly after `row`
    pub fn insert_row_below(&self, row: usize) -> Result<Grid> {
        self.check_row(row)?;
        self.insert_row_at(row + 1)
    }

    fn insert_row_at(&self, position: usize) -> Result<Grid> {
        if position > self.row_count() {
            return Err(Error::row(position, self.row_count()));
        }

        let mut next = self.clone();
        next.rows
            .insert(position, vec![String::new(); self.column_count()]);
        Ok(next)
    }

    // === Column Operations ===

    /// Remove a column from every row, header included
    pub fn delete_column(&self, col: usize) -> Result<Grid> {
        self.check_column(col)?;

        let mut next = self.clone();
        for row in &mut next.rows {
            row.remove(col);
        }
        Ok(next)
    }

    /// Replace the header cell of a column; data rows are untouched.
    ///
    /// Names may be empty or repeat an existing header.
    pub fn rename_column<S: Into<String>>(&self, col: usize, name: S) -> Result<Grid> {
        self.update_cell(0, col, name)
    }

    /// Insert an empty column at `col`, shifting that column right
    pub fn insert_column_left(&self, col: usize) -> Result<Grid> {
        self.insert_column_at(col)
    }

    /// Insert an empty column directly after `col`
    pub fn insert_column_right(&self, col: usize) -> Result<Grid> {
        self.check_column(col)?;
        self.insert_column_at(col + 1)
    }

    fn insert_column_at(&self, position: usize) -> Result<Grid> {
        if position > self.column_count() {
            return Err(Error::column(position, self.column_count()));
        }

        let mut next = self.clone();
        for row in &mut next.rows {
            row.insert(position, String::new());
        }
        Ok(next)
    }

    // === Validation ===

    /// Check that every row has the header's width
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|row| row.len() == width)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count() {
            return Err(Error::row(row, self.row_count()));
        }
        Ok(())
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.column_count() {
            return Err(Error::column(col, self.column_count()));
        }
        Ok(())
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_new_grid() {
        let g = Grid::new();
        assert!(g.is_empty());
        assert_eq!(g.row_count(), 0);
        assert_eq!(g.column_count(), 0);
        assert!(g.header().is_none());
        assert!(g.data_rows().is_empty());
    }

    #[test]
    fn test_from_rows_normalizes_width() {
        let g = grid(&[&["a", "b", "c"], &["1"], &["1", "2", "3", "4"]]);

        assert!(g.is_rectangular());
        assert_eq!(g.row(1), Some(&["1".to_string(), String::new(), String::new()][..]));
        assert_eq!(g.row(2).map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_update_cell() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);
        let next = g.update_cell(1, 1, "x").unwrap();

        assert_eq!(next.cell(1, 1), Some("x"));
        assert_eq!(next.cell(1, 0), Some("1"));
        // Input is untouched
        assert_eq!(g.cell(1, 1), Some("2"));

        let cleared = next.update_cell(1, 0, "").unwrap();
        assert_eq!(cleared.cell(1, 0), Some(""));
    }

    #[test]
    fn test_update_cell_out_of_bounds() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);

        assert_eq!(
            g.update_cell(2, 0, "x"),
            Err(Error::RowOutOfBounds { index: 2, count: 2 })
        );
        assert_eq!(
            g.update_cell(0, 2, "x"),
            Err(Error::ColumnOutOfBounds { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_delete_row() {
        let g = grid(&[&["a", "b"], &["1", "2"], &["3", "4"]]);
        let next = g.delete_row(1).unwrap();

        assert_eq!(next, grid(&[&["a", "b"], &["3", "4"]]));
    }

    #[test]
    fn test_delete_header_row_is_noop() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);
        assert_eq!(g.delete_row(0).unwrap(), g);

        // Also on an empty grid
        assert_eq!(Grid::new().delete_row(0).unwrap(), Grid::new());
    }

    #[test]
    fn test_delete_row_out_of_bounds() {
        let g = grid(&[&["a"], &["1"]]);
        assert!(g.delete_row(2).is_err());
    }

    #[test]
    fn test_insert_rows() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);

        let above = g.insert_row_above(1).unwrap();
        assert_eq!(above, grid(&[&["a", "b"], &["", ""], &["1", "2"]]));

        let below = g.insert_row_below(1).unwrap();
        assert_eq!(below, grid(&[&["a", "b"], &["1", "2"], &["", ""]]));

        // Below the header is the first data position
        let below_header = g.insert_row_below(0).unwrap();
        assert_eq!(below_header.row(1), Some(&[String::new(), String::new()][..]));

        // Above the header is protected
        assert_eq!(g.insert_row_above(0).unwrap(), g);
    }

    #[test]
    fn test_insert_row_bounds() {
        let g = grid(&[&["a"], &["1"]]);

        // Position == row_count appends
        assert_eq!(g.insert_row_above(2).unwrap().row_count(), 3);
        assert!(g.insert_row_above(3).is_err());
        assert!(g.insert_row_below(2).is_err());
        assert!(Grid::new().insert_row_below(0).is_err());
    }

    #[test]
    fn test_delete_column() {
        let g = grid(&[&["a", "b", "c"], &["1", "2", "3"]]);
        let next = g.delete_column(1).unwrap();

        assert_eq!(next, grid(&[&["a", "c"], &["1", "3"]]));
        assert!(g.delete_column(3).is_err());
    }

    #[test]
    fn test_delete_last_column() {
        let g = grid(&[&["a"], &["1"], &["2"]]);
        let next = g.delete_column(0).unwrap();

        assert_eq!(next.column_count(), 0);
        assert_eq!(next.row_count(), 3);
        assert!(next.is_rectangular());
    }

    #[test]
    fn test_rename_column() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);

        let next = g.rename_column(1, "a").unwrap();
        assert_eq!(next, grid(&[&["a", "a"], &["1", "2"]]));

        let blank = g.rename_column(0, "").unwrap();
        assert_eq!(blank.cell(0, 0), Some(""));

        assert!(g.rename_column(2, "z").is_err());
        assert!(Grid::new().rename_column(0, "z").is_err());
    }

    #[test]
    fn test_insert_column_right() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);
        let next = g.insert_column_right(0).unwrap();

        assert_eq!(next, grid(&[&["a", "", "b"], &["1", "", "2"]]));
    }

    #[test]
    fn test_insert_column_left() {
        let g = grid(&[&["a", "b"], &["1", "2"]]);

        let first = g.insert_column_left(0).unwrap();
        assert_eq!(first, grid(&[&["", "a", "b"], &["", "1", "2"]]));

        let end = g.insert_column_left(2).unwrap();
        assert_eq!(end, grid(&[&["a", "b", ""], &["1", "2", ""]]));

        assert!(g.insert_column_left(3).is_err());
        assert!(g.insert_column_right(2).is_err());
    }

    #[test]
    fn test_insert_column_on_empty_grid() {
        let next = Grid::new().insert_column_left(0).unwrap();
        assert!(next.is_empty());
        assert!(Grid::new().insert_column_right(0).is_err());
    }

    #[test]
    fn test_with_header() {
        let g = Grid::with_header(["name", "age"]);
        assert_eq!(g.column_count(), 2);
        assert_eq!(g.row_count(), 1);
        assert!(g.data_rows().is_empty());
    }
}
