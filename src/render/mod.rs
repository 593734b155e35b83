//! Applying merge plans to pane bodies.
//!
//! This module provides:
//! - The backend-agnostic [`PaneBackend`] trait
//! - An in-memory pane and, on wasm32, a DOM pane
//! - The per-redraw callback [`on_draw`]

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod memory;

pub use backend::PaneBackend;
#[cfg(target_arch = "wasm32")]
pub use dom::{merge_dom_panes, DomPane};
pub use memory::{MemoryPane, MemoryRow};

use crate::error::{Result, RowmergeError};
use crate::merge::compute_plan;
use crate::types::{MergeConfig, MergePlan, RowCell};

/// Read column `col` of every row in `pane`, in row order.
pub fn read_cells<P: PaneBackend + ?Sized>(pane: &P, col: usize) -> Result<Vec<RowCell>> {
    (0..pane.row_count())
        .map(|row| {
            Ok(RowCell {
                value: pane.cell_text(row, col)?,
                height: pane.row_height(row)?,
            })
        })
        .collect()
}

/// Remove merged-away rows and resize the survivors.
///
/// # Errors
/// Returns [`RowmergeError::PlanMismatch`] if the pane no longer holds the
/// rows the plan was computed from; the pane is left untouched in that case.
pub fn apply_plan<P: PaneBackend + ?Sized>(pane: &mut P, plan: &MergePlan) -> Result<()> {
    let count = pane.row_count();
    if count != plan.input_rows {
        return Err(RowmergeError::PlanMismatch {
            plan: plan.input_rows,
            pane: count,
        });
    }

    // Back to front so pending indices stay valid
    for row in plan.removed_rows().into_iter().rev() {
        pane.remove_row(row)?;
    }
    for (row, height) in plan.heights().into_iter().enumerate() {
        pane.set_row_height(row, height)?;
    }
    Ok(())
}

/// Redraw callback: merge the frozen pane's merge column in place.
///
/// The scrolling pane is only inspected, never mutated.
///
/// # Errors
/// Returns [`RowmergeError::PaneMismatch`] when alignment checking is enabled
/// and the panes differ in row count. Neither pane is touched in that case.
pub fn on_draw<L, R>(frozen: &mut L, scrolling: &R, config: &MergeConfig) -> Result<MergePlan>
where
    L: PaneBackend + ?Sized,
    R: PaneBackend + ?Sized,
{
    let frozen_rows = frozen.row_count();
    let scrolling_rows = scrolling.row_count();
    if config.check_pane_alignment && frozen_rows != scrolling_rows {
        log::warn!(
            "frozen pane has {frozen_rows} rows but scrolling pane has {scrolling_rows}; skipping merge"
        );
        return Err(RowmergeError::PaneMismatch {
            frozen: frozen_rows,
            scrolling: scrolling_rows,
        });
    }

    merge_pane(frozen, config)
}

/// Merge a frozen pane in place without consulting a scrolling pane.
///
/// # Errors
/// Returns an error if the merge column cannot be read or a height is invalid.
pub fn merge_pane<P: PaneBackend + ?Sized>(
    frozen: &mut P,
    config: &MergeConfig,
) -> Result<MergePlan> {
    let cells = read_cells(&*frozen, config.merge_column)?;
    let plan = compute_plan(&cells)?;
    apply_plan(frozen, &plan)?;
    log::debug!(
        "draw: {} rows -> {} groups, {} removed",
        plan.input_rows,
        plan.len(),
        plan.input_rows - plan.len()
    );
    Ok(plan)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    fn pane(values: &[&str]) -> MemoryPane {
        MemoryPane::from_cells(
            &values
                .iter()
                .map(|v| RowCell::new(*v, 20.0))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_on_draw_merges_frozen_only() {
        let mut left = pane(&["A", "A", "A", "B", "C", "C"]);
        let right = MemoryPane::blank(6, 20.0);
        let plan = on_draw(&mut left, &right, &MergeConfig::default()).unwrap();

        assert_eq!(plan.len(), 3);
        assert_eq!(left.column(0), vec!["A", "B", "C"]);
        assert_eq!(left.heights(), vec![60.0, 20.0, 40.0]);
        assert_eq!(right.row_count(), 6);
    }

    #[test]
    fn test_pane_mismatch_leaves_panes_untouched() {
        let mut left = pane(&["A", "A"]);
        let right = MemoryPane::blank(3, 20.0);
        let err = on_draw(&mut left, &right, &MergeConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            RowmergeError::PaneMismatch {
                frozen: 2,
                scrolling: 3
            }
        ));
        assert_eq!(left.row_count(), 2);
    }

    #[test]
    fn test_alignment_check_disabled() {
        let mut left = pane(&["A", "A"]);
        let right = MemoryPane::blank(3, 20.0);
        let config = MergeConfig {
            check_pane_alignment: false,
            ..MergeConfig::default()
        };
        let plan = on_draw(&mut left, &right, &config).unwrap();
        assert_eq!(plan.heights(), vec![40.0]);
    }

    #[test]
    fn test_merge_pane_alone() {
        let mut left = pane(&["A", "A", "B", "B", "B"]);
        let plan = merge_pane(&mut left, &MergeConfig::default()).unwrap();
        assert_eq!(plan.surviving_rows(), vec![0, 2]);
        assert_eq!(left.heights(), vec![40.0, 60.0]);
    }

    #[test]
    fn test_apply_stale_plan() {
        let mut left = pane(&["A", "A", "B"]);
        let plan = compute_plan(&read_cells(&left, 0).unwrap()).unwrap();
        apply_plan(&mut left, &plan).unwrap();
        let err = apply_plan(&mut left, &plan).unwrap_err();
        assert!(matches!(err, RowmergeError::PlanMismatch { plan: 3, pane: 2 }));
    }
}
