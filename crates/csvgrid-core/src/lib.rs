//! # csvgrid-core
//!
//! Core data model for the csvgrid table editor.
//!
//! This crate provides:
//! - [`Grid`] - A rectangular table of text cells with a header row
//! - [`History`] and [`Snapshot`] - Bounded linear undo/redo
//! - [`Editor`] - The single owner of the live grid and its history
//! - [`EditCommand`] - Editor requests, applied strictly in arrival order
//!
//! ## Example
//!
//! ```rust
//! use csvgrid_core::{Editor, Grid};
//!
//! let mut editor = Editor::new();
//! editor.load(
//!     Grid::from_rows(vec![
//!         vec!["a".into(), "b".into()],
//!         vec!["1".into(), "2".into()],
//!     ]),
//!     None,
//! );
//!
//! editor.insert_column_right(0).unwrap();
//! assert_eq!(editor.grid().header().unwrap(), ["a", "", "b"]);
//!
//! editor.undo();
//! assert_eq!(editor.grid().column_count(), 2);
//! ```

pub mod command;
pub mod editor;
pub mod error;
pub mod grid;
pub mod history;
pub mod options;

// Re-exports for convenience
pub use command::EditCommand;
pub use editor::Editor;
pub use error::{Error, Result};
pub use grid::Grid;
pub use history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use options::{EditorOptions, DEFAULT_FILE_NAME};
