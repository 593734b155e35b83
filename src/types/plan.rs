use serde::{Deserialize, Serialize};

/// A run of consecutive rows sharing the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeGroup {
    /// Shared cell value
    pub value: String,
    /// Index of the representative (surviving) row in the input sequence
    pub first_row: usize,
    /// Number of input rows covered by the group
    pub row_span: usize,
    /// Sum of the covered rows' heights
    pub height: f32,
}

impl MergeGroup {
    /// Index one past the last row covered by the group.
    pub fn end_row(&self) -> usize {
        self.first_row + self.row_span
    }
}

/// Result of merging one materialized row set.
///
/// Groups are ordered by `first_row` and cover `0..input_rows` without gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergePlan {
    pub groups: Vec<MergeGroup>,
    /// Number of rows the plan was computed from
    pub input_rows: usize,
}

impl MergePlan {
    /// Target heights, index-aligned with the rows that survive the merge.
    pub fn heights(&self) -> Vec<f32> {
        self.groups.iter().map(|g| g.height).collect()
    }

    /// Input indices of the rows kept after merging.
    pub fn surviving_rows(&self) -> Vec<usize> {
        self.groups.iter().map(|g| g.first_row).collect()
    }

    /// Input indices of the rows removed by merging, ascending.
    pub fn removed_rows(&self) -> Vec<usize> {
        self.groups
            .iter()
            .flat_map(|g| (g.first_row + 1)..g.end_row())
            .collect()
    }

    /// True when every group covers a single row.
    pub fn is_identity(&self) -> bool {
        self.groups.len() == self.input_rows
    }

    pub fn total_height(&self) -> f32 {
        self.groups.iter().map(|g| g.height).sum()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
