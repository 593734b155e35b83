//! Row-group merging.
//!
//! Collapses runs of consecutive rows that share the same text value into a
//! single group whose height is the sum of the rows it replaces. This is pure
//! computation; applying the result to a pane lives in [`crate::render`].

use crate::error::{Result, RowmergeError};
use crate::types::{MergeGroup, MergePlan, RowCell};

/// Compute merge groups for cells given in row order.
///
/// # Errors
/// Returns [`RowmergeError::InvalidHeight`] if any height is negative or not finite.
pub fn compute_plan(cells: &[RowCell]) -> Result<MergePlan> {
    let groups = cells.iter().enumerate().try_fold(
        Vec::<MergeGroup>::new(),
        |mut groups, (row, cell)| {
            check_height(row, cell.height)?;
            match groups.last_mut() {
                Some(active) if active.value == cell.value => {
                    active.row_span += 1;
                    active.height += cell.height;
                }
                _ => groups.push(MergeGroup {
                    value: cell.value.clone(),
                    first_row: row,
                    row_span: 1,
                    height: cell.height,
                }),
            }
            Ok::<_, RowmergeError>(groups)
        },
    )?;

    log::debug!("merged {} rows into {} groups", cells.len(), groups.len());

    Ok(MergePlan {
        groups,
        input_rows: cells.len(),
    })
}

/// Compute merge groups from parallel value and height slices.
///
/// # Errors
/// Returns [`RowmergeError::LengthMismatch`] if the slices differ in length,
/// or [`RowmergeError::InvalidHeight`] for a bad height.
pub fn compute_plan_from_parts<S: AsRef<str>>(values: &[S], heights: &[f32]) -> Result<MergePlan> {
    if values.len() != heights.len() {
        return Err(RowmergeError::LengthMismatch {
            values: values.len(),
            heights: heights.len(),
        });
    }
    let cells: Vec<RowCell> = values
        .iter()
        .zip(heights)
        .map(|(v, &h)| RowCell::new(v.as_ref(), h))
        .collect();
    compute_plan(&cells)
}

/// Cells a pane would hold after the plan is applied.
pub fn merged_cells(plan: &MergePlan) -> Vec<RowCell> {
    plan.groups
        .iter()
        .map(|g| RowCell::new(g.value.as_str(), g.height))
        .collect()
}

fn check_height(row: usize, height: f32) -> Result<()> {
    if height.is_finite() && height >= 0.0 {
        Ok(())
    } else {
        Err(RowmergeError::InvalidHeight { row, height })
    }
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

    fn cells(values: &[&str], height: f32) -> Vec<RowCell> {
        values.iter().map(|v| RowCell::new(*v, height)).collect()
    }

    #[test]
    fn test_runs_collapse() {
        let plan = compute_plan(&cells(&["A", "A", "A", "B", "C", "C"], 20.0)).unwrap();
        assert_eq!(plan.heights(), vec![60.0, 20.0, 40.0]);
        assert_eq!(plan.surviving_rows(), vec![0, 3, 4]);
        assert_eq!(plan.removed_rows(), vec![1, 2, 5]);
        assert_eq!(plan.input_rows, 6);
    }

    #[test]
    fn test_empty_string_is_a_value() {
        let plan = compute_plan(&cells(&["", "", "x"], 10.0)).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.groups[0].value, "");
        assert_eq!(plan.groups[0].row_span, 2);
    }

    #[test]
    fn test_uneven_heights_sum() {
        let input = vec![
            RowCell::new("A", 18.0),
            RowCell::new("A", 32.5),
            RowCell::new("B", 20.0),
        ];
        let plan = compute_plan(&input).unwrap();
        assert_eq!(plan.heights(), vec![50.5, 20.0]);
    }

    #[test]
    fn test_comparison_is_verbatim() {
        let plan = compute_plan(&cells(&["a", "A", "a ", "a"], 20.0)).unwrap();
        assert!(plan.is_identity());
    }

    #[test]
    fn test_invalid_height() {
        let input = vec![RowCell::new("A", 20.0), RowCell::new("A", f32::NAN)];
        let err = compute_plan(&input).unwrap_err();
        assert!(matches!(err, RowmergeError::InvalidHeight { row: 1, .. }));

        let err = compute_plan(&[RowCell::new("A", -1.0)]).unwrap_err();
        assert!(matches!(err, RowmergeError::InvalidHeight { row: 0, .. }));
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        let err = compute_plan_from_parts(&["A", "B"], &[20.0]).unwrap_err();
        assert!(matches!(
            err,
            RowmergeError::LengthMismatch {
                values: 2,
                heights: 1
            }
        ));
    }

    #[test]
    fn test_remerge_is_identity() {
        let plan = compute_plan(&cells(&["A", "A", "B"], 20.0)).unwrap();
        let merged = merged_cells(&plan);
        assert_eq!(merged, vec![RowCell::new("A", 40.0), RowCell::new("B", 20.0)]);
        let again = compute_plan(&merged).unwrap();
        assert!(again.is_identity());
        assert_eq!(again.heights(), plan.heights());
    }
}
