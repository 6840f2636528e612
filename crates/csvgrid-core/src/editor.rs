//! Editor: the single owner of the live grid and its history

use crate::command::EditCommand;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::{History, Snapshot};
use crate::options::EditorOptions;

/// Owns the live [`Grid`] and its [`History`].
///
/// Every mutation goes through [`Editor::record_and_apply`], so each one
/// interacts with history the same way. The presentation layer reads the
/// current state through [`Editor::grid`] and never mutates it directly.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    history: History,
    options: EditorOptions,
    file_name: Option<String>,
}

impl Editor {
    /// Create an editor with an empty grid
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Create an editor with custom options
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            grid: Grid::new(),
            history: History::with_limit(options.history_limit),
            options,
            file_name: None,
        }
    }

    /// The current grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The undo/redo history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The editor options
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Name of the loaded file, if any
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// File name to offer when saving: the loaded name or the fallback
    pub fn suggested_file_name(&self) -> &str {
        self.file_name
            .as_deref()
            .unwrap_or(&self.options.fallback_file_name)
    }

    /// Replace the grid wholesale (e.g. after an import) and reset history
    pub fn load(&mut self, grid: Grid, file_name: Option<String>) {
        tracing::info!(
            rows = grid.row_count(),
            columns = grid.column_count(),
            file = file_name.as_deref().unwrap_or(""),
            "loaded grid"
        );
        self.grid = grid;
        self.file_name = file_name;
        self.history.reset();
    }

    /// Apply a mutation and record the prior state.
    ///
    /// The mutation sees the current grid and returns the next one. On error
    /// nothing changes. A result equal to the current grid pushes no snapshot
    /// but still drops the redo branch. Returns whether the grid changed.
    pub fn record_and_apply<F>(&mut self, mutation: F) -> Result<bool>
    where
        F: FnOnce(&Grid) -> Result<Grid>,
    {
        let next = mutation(&self.grid)?;
        if next == self.grid {
            self.history.clear_redo();
            return Ok(false);
        }

        let before = std::mem::replace(&mut self.grid, next);
        self.history.record(Snapshot::capture(&before));
        Ok(true)
    }

    // === Edit Operations ===

    /// Replace one cell value
    pub fn update_cell<S: Into<String>>(&mut self, row: usize, col: usize, value: S) -> Result<bool> {
        let value = value.into();
        self.record_and_apply(|grid| grid.update_cell(row, col, value))
    }

    /// Remove a data row; the header row is protected
    pub fn delete_row(&mut self, row: usize) -> Result<bool> {
        if row == 0 {
            tracing::debug!("ignoring delete of header row");
            return Ok(false);
        }
        self.record_and_apply(|grid| grid.delete_row(row))
    }

    /// Insert an empty row above `row`; the header row is protected
    pub fn insert_row_above(&mut self, row: usize) -> Result<bool> {
        if row == 0 {
            tracing::debug!("ignoring insert above header row");
            return Ok(false);
        }
        self.record_and_apply(|grid| grid.insert_row_above(row))
    }

    /// Insert an empty row below `row`
    pub fn insert_row_below(&mut self, row: usize) -> Result<bool> {
        self.record_and_apply(|grid| grid.insert_row_below(row))
    }

    /// Remove a column from every row
    pub fn delete_column(&mut self, col: usize) -> Result<bool> {
        self.record_and_apply(|grid| grid.delete_column(col))
    }

    /// Rename a column. `None` means the name prompt was cancelled.
    pub fn rename_column(&mut self, col: usize, name: Option<String>) -> Result<bool> {
        let Some(name) = name else {
            tracing::debug!(col, "rename cancelled");
            return Ok(false);
        };
        self.record_and_apply(|grid| grid.rename_column(col, name))
    }

    /// Insert an empty column left of `col`
    pub fn insert_column_left(&mut self, col: usize) -> Result<bool> {
        self.record_and_apply(|grid| grid.insert_column_left(col))
    }

    /// Insert an empty column right of `col`
    pub fn insert_column_right(&mut self, col: usize) -> Result<bool> {
        self.record_and_apply(|grid| grid.insert_column_right(col))
    }

    // === History ===

    /// Restore the previous state. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.grid)
    }

    /// Re-apply an undone state. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.grid)
    }

    /// Check if an undo step is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if a redo step is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // === Commands ===

    /// Apply a single request. Returns whether the grid changed.
    pub fn apply(&mut self, command: EditCommand) -> Result<bool> {
        tracing::trace!(%command, "applying edit");
        match command {
            EditCommand::UpdateCell { row, col, value } => self.update_cell(row, col, value),
            EditCommand::DeleteRow(row) => self.delete_row(row),
            EditCommand::InsertRowAbove(row) => self.insert_row_above(row),
            EditCommand::InsertRowBelow(row) => self.insert_row_below(row),
            EditCommand::DeleteColumn(col) => self.delete_column(col),
            EditCommand::RenameColumn { col, name } => self.rename_column(col, Some(name)),
            EditCommand::InsertColumnLeft(col) => self.insert_column_left(col),
            EditCommand::InsertColumnRight(col) => self.insert_column_right(col),
            EditCommand::Undo => Ok(self.undo()),
            EditCommand::Redo => Ok(self.redo()),
        }
    }

    /// Apply requests strictly in order, each building on the previous result.
    ///
    /// Stops at the first failing request; requests before it stay applied.
    /// Returns the number of requests that changed the grid.
    pub fn apply_all<I>(&mut self, commands: I) -> Result<usize>
    where
        I: IntoIterator<Item = EditCommand>,
    {
        let mut changed = 0;
        for command in commands {
            if self.apply(command)? {
                changed += 1;
            }
        }
        Ok(changed)
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
