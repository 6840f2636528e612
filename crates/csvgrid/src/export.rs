//! Export sinks with automatic fallback
//!
//! Saving goes through one capability, [`save_csv`], backed by two
//! interchangeable [`CsvSink`]s: a primary one (usually a native save handle)
//! and a fallback one (usually a download). Both receive the same text.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csvgrid_core::Grid;
use csvgrid_csv::{CsvError, CsvWriteOptions, CsvWriter};
use thiserror::Error;

/// Errors reported by a sink
#[derive(Debug, Error)]
pub enum SinkError {
    /// The user dismissed the save dialog
    #[error("Save cancelled")]
    Cancelled,

    /// The sink cannot be used in this environment
    #[error("Save mechanism not supported")]
    Unsupported,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic failure with message
    #[error("{0}")]
    Failed(String),
}

/// Errors that end an export request
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// The fallback sink failed as well
    #[error("Export through {sink} failed: {source}")]
    Sink {
        sink: String,
        #[source]
        source: SinkError,
    },
}

/// How an export request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Text was written through the named sink
    Written { sink: String, file_name: String },
    /// The user cancelled; nothing was written
    Cancelled,
    /// The grid has no rows or no columns; nothing was written
    NothingToSave,
}

/// A destination for serialized CSV text
pub trait CsvSink {
    /// Short name used in logs and outcomes
    fn name(&self) -> &str;

    /// Whether this sink can be used at all
    fn is_available(&self) -> bool {
        true
    }

    /// Deliver the complete text under the given file name
    fn write(&mut self, file_name: &str, text: &str) -> Result<(), SinkError>;
}

/// Writes `<dir>/<file_name>`, like a browser download
#[derive(Debug, Clone)]
pub struct DownloadSink {
    dir: PathBuf,
}

impl DownloadSink {
    /// Create a sink writing into `dir`
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CsvSink for DownloadSink {
    fn name(&self) -> &str {
        "download"
    }

    fn write(&mut self, file_name: &str, text: &str) -> Result<(), SinkError> {
        // Only the final component is used; names cannot escape the directory
        let name = Path::new(file_name)
            .file_name()
            .ok_or_else(|| SinkError::Failed(format!("Invalid file name: {file_name:?}")))?;
        let path = self.dir.join(name);

        fs::write(&path, text)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "downloaded CSV");
        Ok(())
    }
}

/// Writes through an already-opened handle, like a native save dialog.
///
/// A sink without a handle is unavailable.
#[derive(Debug)]
pub struct SaveHandleSink<W> {
    handle: Option<W>,
}

impl<W: Write> SaveHandleSink<W> {
    /// Create a sink writing through `handle`
    pub fn new(handle: W) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Create a sink that reports itself unavailable
    pub fn unavailable() -> Self {
        Self { handle: None }
    }

    /// Take the handle back
    pub fn into_inner(self) -> Option<W> {
        self.handle
    }
}

impl<W: Write> CsvSink for SaveHandleSink<W> {
    fn name(&self) -> &str {
        "save"
    }

    fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    fn write(&mut self, file_name: &str, text: &str) -> Result<(), SinkError> {
        let handle = self.handle.as_mut().ok_or(SinkError::Unsupported)?;
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        tracing::info!(file = file_name, bytes = text.len(), "saved CSV");
        Ok(())
    }
}

/// Serialize `grid` and deliver it through `primary`, falling back to
/// `fallback` when the primary sink is unavailable or fails.
///
/// `file_name` is the answer to the file name prompt; `None` or an empty name
/// means the prompt was cancelled. A cancel from either sink ends the request
/// without error. A grid without columns has nothing to save, since its rows
/// cannot be written as CSV records. The grid is never modified.
pub fn save_csv(
    grid: &Grid,
    file_name: Option<&str>,
    primary: &mut dyn CsvSink,
    fallback: &mut dyn CsvSink,
) -> Result<ExportOutcome, ExportError> {
    if grid.is_empty() || grid.column_count() == 0 {
        tracing::debug!(rows = grid.row_count(), "nothing to save");
        return Ok(ExportOutcome::NothingToSave);
    }
    let file_name = match file_name {
        Some(name) if !name.is_empty() => name,
        _ => {
            tracing::debug!("save cancelled at file name prompt");
            return Ok(ExportOutcome::Cancelled);
        }
    };

    let text = CsvWriter::write_string(grid, &CsvWriteOptions::default())?;

    if primary.is_available() {
        match primary.write(file_name, &text) {
            Ok(()) => return Ok(written(primary, file_name)),
            Err(SinkError::Cancelled) => {
                tracing::debug!(sink = primary.name(), "save cancelled");
                return Ok(ExportOutcome::Cancelled);
            }
            Err(e) => {
                tracing::warn!(
                    sink = primary.name(),
                    fallback = fallback.name(),
                    error = %e,
                    "save failed, falling back"
                );
            }
        }
    } else {
        tracing::info!(
            sink = primary.name(),
            fallback = fallback.name(),
            "save unavailable, falling back"
        );
    }

    match fallback.write(file_name, &text) {
        Ok(()) => Ok(written(fallback, file_name)),
        Err(SinkError::Cancelled) => Ok(ExportOutcome::Cancelled),
        Err(source) => Err(ExportError::Sink {
            sink: fallback.name().to_string(),
            source,
        }),
    }
}

fn written(sink: &dyn CsvSink, file_name: &str) -> ExportOutcome {
    ExportOutcome::Written {
        sink: sink.name().to_string(),
        file_name: file_name.to_string(),
    }
}
