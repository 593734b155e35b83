//! Tests for row-group merge computation and its application to panes.
//!
//! A group is a run of consecutive rows with identical text in the merge
//! column; the surviving row takes the summed height of its run.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{assert_pane, cells, cells_with_heights, frozen_pane, scrolling_pane, ROW};
use rowmerge::merge::{compute_plan, compute_plan_from_parts, merged_cells};
use rowmerge::render::{apply_plan, on_draw, read_cells, PaneBackend};
use rowmerge::{MergeConfig, RowmergeError};
use test_case::test_case;

// ============================================================================
// PURE COMPUTATION
// ============================================================================

#[test_case(&["A", "A", "A", "B", "C", "C"], &[60.0, 20.0, 40.0] ; "mixed runs")]
#[test_case(&["A", "B", "C"], &[20.0, 20.0, 20.0] ; "all distinct")]
#[test_case(&["A", "A", "A"], &[60.0] ; "all equal")]
#[test_case(&["A", "B", "A"], &[20.0, 20.0, 20.0] ; "non adjacent repeats")]
#[test_case(&["", "", "A", ""], &[40.0, 20.0, 20.0] ; "empty string values")]
#[test_case(&[], &[] ; "empty input")]
fn test_group_heights(values: &[&str], expected: &[f32]) {
    let plan = compute_plan(&cells(values)).unwrap();
    assert_eq!(plan.heights(), expected);
    assert_eq!(plan.input_rows, values.len());
}

#[test]
fn test_groups_cover_input_without_gaps() {
    let plan = compute_plan(&cells(&["A", "A", "B", "B", "B", "C", "A"])).unwrap();
    let mut next = 0;
    for group in &plan.groups {
        assert_eq!(group.first_row, next);
        assert!(group.row_span >= 1);
        next = group.end_row();
    }
    assert_eq!(next, plan.input_rows);
    assert_eq!(plan.removed_rows(), vec![1, 3, 4]);
}

#[test]
fn test_total_height_preserved() {
    let input = cells_with_heights(&[("A", 18.0), ("A", 24.0), ("B", 31.0), ("B", 7.0)]);
    let plan = compute_plan(&input).unwrap();
    assert_eq!(plan.total_height(), 80.0);
    assert_eq!(plan.heights(), vec![42.0, 38.0]);
}

#[test]
fn test_merge_is_idempotent() {
    let first = compute_plan(&cells(&["A", "A", "A", "B", "C", "C"])).unwrap();
    let second = compute_plan(&merged_cells(&first)).unwrap();
    assert!(second.is_identity());
    assert_eq!(second.heights(), first.heights());
    assert_eq!(second.len(), first.len());
}

#[test]
fn test_from_parts() {
    let plan = compute_plan_from_parts(&["x", "x", "y"], &[10.0, 15.0, 20.0]).unwrap();
    assert_eq!(plan.heights(), vec![25.0, 20.0]);

    let err = compute_plan_from_parts(&["x"], &[]).unwrap_err();
    assert!(matches!(err, RowmergeError::LengthMismatch { .. }));
}

// ============================================================================
// APPLYING TO PANES
// ============================================================================

#[test]
fn test_draw_collapses_frozen_pane() {
    let mut left = frozen_pane(&["A", "A", "A", "B", "C", "C"]);
    let right = scrolling_pane(6);
    on_draw(&mut left, &right, &MergeConfig::default()).unwrap();

    assert_pane(&left, &["A", "B", "C"], &[60.0, 20.0, 40.0]);
    assert_eq!(right.row_count(), 6);
    assert_eq!(right.heights(), vec![ROW; 6]);
}

#[test]
fn test_all_distinct_leaves_pane_unchanged() {
    let mut left = frozen_pane(&["A", "B", "C"]);
    let before = left.clone();
    let plan = on_draw(&mut left, &scrolling_pane(3), &MergeConfig::default()).unwrap();
    assert!(plan.is_identity());
    assert_eq!(left, before);
}

#[test]
fn test_all_equal_collapses_to_one_row() {
    let mut left = frozen_pane(&["A", "A", "A"]);
    on_draw(&mut left, &scrolling_pane(3), &MergeConfig::default()).unwrap();
    assert_pane(&left, &["A"], &[60.0]);
}

#[test]
fn test_empty_draw() {
    let mut left = frozen_pane(&[]);
    let plan = on_draw(&mut left, &scrolling_pane(0), &MergeConfig::default()).unwrap();
    assert!(plan.is_empty());
    assert_eq!(left.row_count(), 0);
}

#[test]
fn test_redraw_of_merged_pane_is_stable() {
    let mut left = frozen_pane(&["A", "A", "B"]);
    on_draw(&mut left, &scrolling_pane(3), &MergeConfig::default()).unwrap();
    let merged = left.clone();

    // Re-running on the already merged rows must not change anything
    let again = compute_plan(&read_cells(&left, 0).unwrap()).unwrap();
    apply_plan(&mut left, &again).unwrap();
    assert_eq!(left, merged);
}

#[test]
fn test_mismatched_panes_rejected() {
    let mut left = frozen_pane(&["A", "A", "B"]);
    let before = left.clone();
    let err = on_draw(&mut left, &scrolling_pane(4), &MergeConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        RowmergeError::PaneMismatch {
            frozen: 3,
            scrolling: 4
        }
    ));
    assert_eq!(left, before);
}

#[test]
fn test_merge_column_outside_row() {
    let mut left = frozen_pane(&["A"]);
    let config = MergeConfig {
        merge_column: 1,
        frozen_columns: 2,
        ..MergeConfig::default()
    };
    let err = on_draw(&mut left, &scrolling_pane(1), &config).unwrap_err();
    assert!(matches!(
        err,
        RowmergeError::ColumnOutOfRange {
            column: 1,
            columns: 1
        }
    ));
}
