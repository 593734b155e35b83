//! In-memory pane used by the table model, the CLI and tests.

use serde::{Deserialize, Serialize};

use super::PaneBackend;
use crate::error::{Result, RowmergeError};
use crate::types::RowCell;

/// A materialized row: cell texts plus rendered height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRow {
    pub cells: Vec<String>,
    pub height: f32,
}

/// Pane body held in memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryPane {
    pub rows: Vec<MemoryRow>,
}

impl MemoryPane {
    pub fn new(rows: Vec<MemoryRow>) -> Self {
        Self { rows }
    }

    /// Single-column pane from frozen cells.
    pub fn from_cells(cells: &[RowCell]) -> Self {
        Self {
            rows: cells
                .iter()
                .map(|c| MemoryRow {
                    cells: vec![c.value.clone()],
                    height: c.height,
                })
                .collect(),
        }
    }

    /// Pane with `count` empty rows of uniform height.
    pub fn blank(count: usize, height: f32) -> Self {
        Self {
            rows: vec![
                MemoryRow {
                    cells: Vec::new(),
                    height,
                };
                count
            ],
        }
    }

    /// Values of column `col`, one per row (missing cells read as empty).
    pub fn column(&self, col: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.cells.get(col).cloned().unwrap_or_default())
            .collect()
    }

    pub fn heights(&self) -> Vec<f32> {
        self.rows.iter().map(|r| r.height).collect()
    }

    fn row(&self, row: usize) -> Result<&MemoryRow> {
        self.rows.get(row).ok_or_else(|| missing_row(row, self.rows.len()))
    }
}

fn missing_row(row: usize, count: usize) -> RowmergeError {
    RowmergeError::RowOutOfRange { row, rows: count }
}

impl PaneBackend for MemoryPane {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_text(&self, row: usize, col: usize) -> Result<String> {
        let r = self.row(row)?;
        r.cells
            .get(col)
            .cloned()
            .ok_or(RowmergeError::ColumnOutOfRange {
                column: col,
                columns: r.cells.len(),
            })
    }

    fn row_height(&self, row: usize) -> Result<f32> {
        Ok(self.row(row)?.height)
    }

    fn remove_row(&mut self, row: usize) -> Result<()> {
        if row >= self.rows.len() {
            return Err(missing_row(row, self.rows.len()));
        }
        self.rows.remove(row);
        Ok(())
    }

    fn set_row_height(&mut self, row: usize, height: f32) -> Result<()> {
        let count = self.rows.len();
        let r = self
            .rows
            .get_mut(row)
            .ok_or_else(|| missing_row(row, count))?;
        r.height = height;
        Ok(())
    }
}
