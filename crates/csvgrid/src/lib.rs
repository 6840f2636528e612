//! # csvgrid
//!
//! An editable CSV grid with linear undo/redo history.
//!
//! ## Features
//!
//! - Import CSV text into a rectangular grid whose first row is the header
//! - Cell edits and row/column insert, delete and rename
//! - Bounded undo/redo; importing a file starts a fresh history
//! - Export through a primary sink with automatic fallback
//!
//! ## Example
//!
//! ```rust
//! use csvgrid::prelude::*;
//!
//! let mut editor = Editor::new();
//! editor.import_csv("a,b\n1,2\n", Some("numbers.csv".into())).unwrap();
//!
//! editor.update_cell(1, 0, "10").unwrap();
//! editor.insert_row_below(1).unwrap();
//! editor.undo();
//!
//! assert_eq!(editor.export_csv().unwrap(), "a,b\r\n10,2\r\n");
//! ```

pub mod export;
pub mod prelude;

// Re-export export types
pub use export::{save_csv, CsvSink, DownloadSink, ExportError, ExportOutcome, SaveHandleSink, SinkError};

// Re-export core types
pub use csvgrid_core::{
    EditCommand,
    Editor,
    EditorOptions,
    // Error types
    Error,
    Grid,
    History,
    Result,
    Snapshot,

    // Constants
    DEFAULT_FILE_NAME,
    DEFAULT_HISTORY_LIMIT,
};

// Re-export I/O types
pub use csvgrid_csv::{
    parse_csv, serialize_csv, CsvError, CsvReadOptions, CsvReader, CsvResult, CsvWriteOptions,
    CsvWriter, LineTerminator,
};

use std::path::Path;

/// Extension trait for Editor to add CSV import and export
pub trait EditorCsvExt {
    /// Parse CSV text and load it, resetting history.
    ///
    /// On failure the editor is left exactly as it was.
    fn import_csv(&mut self, text: &str, file_name: Option<String>) -> CsvResult<()>;

    /// Like [`EditorCsvExt::import_csv`] with custom read options
    fn import_csv_with(
        &mut self,
        text: &str,
        file_name: Option<String>,
        options: &CsvReadOptions,
    ) -> CsvResult<()>;

    /// Read a CSV file and load it under the file's name
    fn open_csv<P: AsRef<Path>>(&mut self, path: P) -> CsvResult<()>;

    /// Serialize the current grid
    fn export_csv(&self) -> CsvResult<String>;

    /// Save the current grid through `primary`, falling back to `fallback`
    fn save_csv(
        &self,
        file_name: Option<&str>,
        primary: &mut dyn CsvSink,
        fallback: &mut dyn CsvSink,
    ) -> std::result::Result<ExportOutcome, ExportError>;
}

impl EditorCsvExt for Editor {
    fn import_csv(&mut self, text: &str, file_name: Option<String>) -> CsvResult<()> {
        self.import_csv_with(text, file_name, &CsvReadOptions::default())
    }

    fn import_csv_with(
        &mut self,
        text: &str,
        file_name: Option<String>,
        options: &CsvReadOptions,
    ) -> CsvResult<()> {
        let grid = CsvReader::read_str(text, options).map_err(|e| {
            tracing::warn!(error = %e, "CSV import failed, keeping current grid");
            e
        })?;
        self.load(grid, file_name);
        Ok(())
    }

    fn open_csv<P: AsRef<Path>>(&mut self, path: P) -> CsvResult<()> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        self.import_csv(&text, file_name)
    }

    fn export_csv(&self) -> CsvResult<String> {
        serialize_csv(self.grid())
    }

    fn save_csv(
        &self,
        file_name: Option<&str>,
        primary: &mut dyn CsvSink,
        fallback: &mut dyn CsvSink,
    ) -> std::result::Result<ExportOutcome, ExportError> {
        save_csv(self.grid(), file_name, primary, fallback)
    }
}
