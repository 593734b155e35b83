//! Structured error types for rowmerge.

/// All errors that can occur while merging and applying row groups.
#[derive(Debug, thiserror::Error)]
pub enum RowmergeError {
    /// The frozen and scrolling panes hold a different number of rows.
    #[error("Pane mismatch: frozen pane has {frozen} rows, scrolling pane has {scrolling}")]
    PaneMismatch { frozen: usize, scrolling: usize },

    /// Parallel value/height inputs differ in length.
    #[error("Length mismatch: {values} values, {heights} heights")]
    LengthMismatch { values: usize, heights: usize },

    /// A plan was applied to a pane it was not computed for.
    #[error("Plan mismatch: plan covers {plan} rows, pane has {pane}")]
    PlanMismatch { plan: usize, pane: usize },

    /// Row height is negative or not finite.
    #[error("Invalid height {height} for row {row}")]
    InvalidHeight { row: usize, height: f32 },

    /// Row index past the end of a pane.
    #[error("Row {row} out of range ({rows} rows)")]
    RowOutOfRange { row: usize, rows: usize },

    /// Merge column is outside the frozen pane.
    #[error("Column {column} out of range ({columns} frozen columns)")]
    ColumnOutOfRange { column: usize, columns: usize },

    /// DOM access failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Invalid configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RowmergeError>;

#[cfg(target_arch = "wasm32")]
impl From<RowmergeError> for wasm_bindgen::JsValue {
    fn from(e: RowmergeError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_mismatch_message() {
        let err = RowmergeError::PaneMismatch {
            frozen: 3,
            scrolling: 5,
        };
        assert_eq!(
            err.to_string(),
            "Pane mismatch: frozen pane has 3 rows, scrolling pane has 5"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: RowmergeError = io.into();
        assert!(matches!(err, RowmergeError::Io(_)));
    }
}
