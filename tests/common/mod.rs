//! Common test utilities and assertion helpers.
//!
//! Builders for frozen/scrolling panes and assertions over merge results.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use rowmerge::render::{MemoryPane, MemoryRow, PaneBackend};
use rowmerge::types::RowCell;

/// Default height for test rows
pub const ROW: f32 = 20.0;

/// Frozen cells with uniform height.
#[must_use]
pub fn cells(values: &[&str]) -> Vec<RowCell> {
    values.iter().map(|v| RowCell::new(*v, ROW)).collect()
}

/// Frozen cells with explicit heights.
#[must_use]
pub fn cells_with_heights(values: &[(&str, f32)]) -> Vec<RowCell> {
    values.iter().map(|(v, h)| RowCell::new(*v, *h)).collect()
}

/// Frozen pane holding one column of values.
#[must_use]
pub fn frozen_pane(values: &[&str]) -> MemoryPane {
    MemoryPane::from_cells(&cells(values))
}

/// Scrolling pane with one distinct cell per row.
#[must_use]
pub fn scrolling_pane(rows: usize) -> MemoryPane {
    MemoryPane::new(
        (0..rows)
            .map(|i| MemoryRow {
                cells: vec![format!("r{i}")],
                height: ROW,
            })
            .collect(),
    )
}

/// Table rows from string tuples.
#[must_use]
pub fn table_rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|c| (*c).to_string()).collect())
        .collect()
}

/// Assert the pane's merge column and heights.
pub fn assert_pane(pane: &MemoryPane, values: &[&str], heights: &[f32]) {
    assert_eq!(pane.row_count(), values.len(), "row count");
    assert_eq!(pane.column(0), values, "values");
    assert_eq!(pane.heights(), heights, "heights");
}
