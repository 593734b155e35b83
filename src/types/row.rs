use serde::{Deserialize, Serialize};

/// One frozen-column cell of a materialized row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowCell {
    /// Text content of the cell, compared verbatim
    pub value: String,
    /// Rendered height of the row in pixels
    pub height: f32,
}

impl RowCell {
    pub fn new(value: impl Into<String>, height: f32) -> Self {
        Self {
            value: value.into(),
            height,
        }
    }
}
