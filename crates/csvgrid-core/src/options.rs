//! Editor options

use crate::history::DEFAULT_HISTORY_LIMIT;

/// Default file name offered when no file has been loaded
pub const DEFAULT_FILE_NAME: &str = "data.csv";

/// Options for an [`Editor`](crate::Editor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Maximum number of undo steps kept (0 disables history)
    pub history_limit: usize,
    /// File name suggested on save when nothing was loaded
    pub fallback_file_name: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            fallback_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}
