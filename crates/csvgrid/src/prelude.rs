//! Prelude module - common imports for csvgrid users
//!
//! ```rust
//! use csvgrid::prelude::*;
//! ```

pub use crate::{
    // Export types
    save_csv,
    CsvSink,
    DownloadSink,
    // I/O types
    CsvReadOptions,
    CsvWriteOptions,
    // Main types
    EditCommand,
    Editor,
    // Extension traits
    EditorCsvExt,
    EditorOptions,
    // Error types
    Error,
    ExportError,
    ExportOutcome,
    Grid,
    Result,
    SaveHandleSink,
    SinkError,
};
