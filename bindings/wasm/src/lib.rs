//! WebAssembly bindings for csvgrid
//!
//! Exposes the editor to JavaScript so a browser page can load a CSV file,
//! render and edit the grid, step through undo/redo, and save the result.
//! The page owns rendering and dialogs; this module owns the grid and history.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use csvgrid::{
    save_csv, CsvSink, Editor, EditorCsvExt, EditorOptions, ExportOutcome, SinkError,
};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

// =============================================================================
// Sinks backed by JavaScript callbacks
// =============================================================================

/// Calls `callback(fileName, text)`. A thrown `AbortError` counts as a cancel.
struct CallbackSink {
    name: &'static str,
    callback: Option<js_sys::Function>,
}

impl CsvSink for CallbackSink {
    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.callback.is_some()
    }

    fn write(&mut self, file_name: &str, text: &str) -> Result<(), SinkError> {
        let callback = self.callback.as_ref().ok_or(SinkError::Unsupported)?;
        callback
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(file_name),
                &JsValue::from_str(text),
            )
            .map(|_| ())
            .map_err(|err| {
                let name = err
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.name()));
                match name.as_deref() {
                    Some("AbortError") => SinkError::Cancelled,
                    _ => SinkError::Failed(format!("{:?}", err)),
                }
            })
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
enum SaveResult {
    #[serde(rename_all = "camelCase")]
    Written { sink: String, file_name: String },
    Cancelled,
    NothingToSave,
}

impl From<ExportOutcome> for SaveResult {
    fn from(outcome: ExportOutcome) -> Self {
        match outcome {
            ExportOutcome::Written { sink, file_name } => SaveResult::Written { sink, file_name },
            ExportOutcome::Cancelled => SaveResult::Cancelled,
            ExportOutcome::NothingToSave => SaveResult::NothingToSave,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryState {
    can_undo: bool,
    can_redo: bool,
    undo_depth: usize,
    redo_depth: usize,
}

// =============================================================================
// CsvEditor - JavaScript wrapper
// =============================================================================

/// An editable CSV grid with undo/redo.
#[wasm_bindgen]
pub struct CsvEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl CsvEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(history_limit: Option<usize>) -> Self {
        let mut options = EditorOptions::default();
        if let Some(limit) = history_limit {
            options.history_limit = limit;
        }
        Self {
            inner: Editor::with_options(options),
        }
    }

    // === Import / Export ===

    /// Load CSV text; history starts fresh. On error the grid is unchanged.
    #[wasm_bindgen(js_name = importCsv)]
    pub fn import_csv(&mut self, text: &str, file_name: Option<String>) -> Result<(), JsError> {
        self.inner.import_csv(text, file_name).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self) -> Result<String, JsError> {
        self.inner.export_csv().map_err(to_js_error)
    }

    /// Save through `save(fileName, text)` when given, else through
    /// `download(fileName, text)`. `fileName` is null when the prompt was
    /// cancelled.
    #[wasm_bindgen(js_name = saveCsv)]
    pub fn save_csv(
        &self,
        file_name: Option<String>,
        save: Option<js_sys::Function>,
        download: js_sys::Function,
    ) -> Result<JsValue, JsError> {
        let mut primary = CallbackSink {
            name: "save",
            callback: save,
        };
        let mut fallback = CallbackSink {
            name: "download",
            callback: Some(download),
        };

        let outcome = save_csv(
            self.inner.grid(),
            file_name.as_deref(),
            &mut primary,
            &mut fallback,
        )
        .map_err(to_js_error)?;

        serde_wasm_bindgen::to_value(&SaveResult::from(outcome)).map_err(to_js_error)
    }

    // === Grid Access ===

    /// All rows as an array of string arrays, header first
    pub fn rows(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.grid()).map_err(to_js_error)
    }

    pub fn header(&self) -> js_sys::Array {
        self.inner
            .grid()
            .header()
            .unwrap_or(&[])
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.inner.grid().row_count()
    }

    #[wasm_bindgen(getter, js_name = columnCount)]
    pub fn column_count(&self) -> usize {
        self.inner.grid().column_count()
    }

    #[wasm_bindgen(getter, js_name = suggestedFileName)]
    pub fn suggested_file_name(&self) -> String {
        self.inner.suggested_file_name().to_string()
    }

    // === Edit Operations ===

    #[wasm_bindgen(js_name = updateCell)]
    pub fn update_cell(&mut self, row: usize, col: usize, value: String) -> Result<bool, JsError> {
        self.inner.update_cell(row, col, value).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = deleteRow)]
    pub fn delete_row(&mut self, row: usize) -> Result<bool, JsError> {
        self.inner.delete_row(row).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertRowAbove)]
    pub fn insert_row_above(&mut self, row: usize) -> Result<bool, JsError> {
        self.inner.insert_row_above(row).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertRowBelow)]
    pub fn insert_row_below(&mut self, row: usize) -> Result<bool, JsError> {
        self.inner.insert_row_below(row).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = deleteColumn)]
    pub fn delete_column(&mut self, col: usize) -> Result<bool, JsError> {
        self.inner.delete_column(col).map_err(to_js_error)
    }

    /// `name` is null when the rename prompt was cancelled
    #[wasm_bindgen(js_name = renameColumn)]
    pub fn rename_column(&mut self, col: usize, name: Option<String>) -> Result<bool, JsError> {
        self.inner.rename_column(col, name).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertColumnLeft)]
    pub fn insert_column_left(&mut self, col: usize) -> Result<bool, JsError> {
        self.inner.insert_column_left(col).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = insertColumnRight)]
    pub fn insert_column_right(&mut self, col: usize) -> Result<bool, JsError> {
        self.inner.insert_column_right(col).map_err(to_js_error)
    }

    // === History ===

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    #[wasm_bindgen(getter, js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter, js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    #[wasm_bindgen(js_name = historyState)]
    pub fn history_state(&self) -> Result<JsValue, JsError> {
        let history = self.inner.history();
        let state = HistoryState {
            can_undo: history.can_undo(),
            can_redo: history.can_redo(),
            undo_depth: history.undo_depth(),
            redo_depth: history.redo_depth(),
        };
        serde_wasm_bindgen::to_value(&state).map_err(to_js_error)
    }
}

impl Default for CsvEditor {
    fn default() -> Self {
        Self::new(None)
    }
}

#[wasm_bindgen(start)]
pub fn init() {}
