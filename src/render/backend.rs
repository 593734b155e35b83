//! Pane backend trait for pluggable UI layers.
//!
//! This module defines the `PaneBackend` trait that abstracts the row
//! operations a draw callback needs, allowing the DOM adapter and the
//! in-memory pane to be used interchangeably.

use crate::error::Result;

/// Row-level access to one pane body
///
/// Rows are addressed by their current index; removing a row shifts the
/// indices of every row after it.
pub trait PaneBackend {
    /// Number of materialized rows
    fn row_count(&self) -> usize;

    /// Text content of cell `col` in row `row`
    fn cell_text(&self, row: usize, col: usize) -> Result<String>;

    /// Rendered height of a row in pixels
    fn row_height(&self, row: usize) -> Result<f32>;

    /// Remove a row element
    fn remove_row(&mut self, row: usize) -> Result<()>;

    /// Override a row's height
    fn set_row_height(&mut self, row: usize, height: f32) -> Result<()>;
}
