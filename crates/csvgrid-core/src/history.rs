//! Undo/redo history of grid snapshots
//!
//! History is linear: recording a new snapshot discards everything on the
//! redo stack. Snapshots are owned copies, so nothing on either stack can
//! alias the live grid.

use crate::grid::Grid;

/// Default maximum number of undo steps
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// An immutable copy of a grid at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
}

impl Snapshot {
    /// Copy the current state of a grid
    pub fn capture(grid: &Grid) -> Self {
        Self { grid: grid.clone() }
    }

    /// Rows held by this snapshot
    pub fn rows(&self) -> &[Vec<String>] {
        self.grid.rows()
    }

    /// Turn the snapshot back into a live grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// Bounded undo/redo stacks
#[derive(Debug, Clone)]
pub struct History {
    /// Past states, most recent last
    undo_stack: Vec<Snapshot>,
    /// Undone states, most recent last
    redo_stack: Vec<Snapshot>,
    /// Maximum undo depth
    limit: usize,
}

impl History {
    /// Create an empty history with the default depth
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding at most `limit` undo steps
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit,
        }
    }

    /// Push the pre-mutation state and drop the redo branch
    pub fn record(&mut self, before: Snapshot) {
        self.redo_stack.clear();
        if self.limit == 0 {
            return;
        }

        self.undo_stack.push(before);
        if self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back one state.
    ///
    /// Returns `false` when there is nothing to undo; `current` is left as is.
    pub fn undo(&mut self, current: &mut Grid) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            tracing::debug!("nothing to undo");
            return false;
        };

        let replaced = std::mem::replace(current, previous.into_grid());
        self.redo_stack.push(Snapshot { grid: replaced });
        true
    }

    /// Step forward one previously undone state.
    ///
    /// Returns `false` when there is nothing to redo; `current` is left as is.
    pub fn redo(&mut self, current: &mut Grid) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            tracing::debug!("nothing to redo");
            return false;
        };

        let replaced = std::mem::replace(current, next.into_grid());
        self.undo_stack.push(Snapshot { grid: replaced });
        true
    }

    /// Drop the redo branch without recording a snapshot
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Clear both stacks
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Check if an undo step is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if a redo step is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo steps available
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of redo steps available
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Maximum undo depth
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
