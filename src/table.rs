//! Host-side table model.
//!
//! Holds the full row set, applies the sort keys and page length the host
//! widget would, and materializes the current page as a frozen pane plus a
//! scrolling pane. Merging only ever sees the rows of one draw.

use std::cmp::Ordering;

use serde::Serialize;

use crate::error::Result;
use crate::render::{on_draw, MemoryPane, MemoryRow};
use crate::types::{MergeConfig, MergePlan, PageLength, SortDirection, SortKey};

/// Panes handed to the draw callback
#[derive(Debug, Clone, Serialize)]
pub struct DrawEvent {
    /// Leading (fixed) columns of the current page
    pub frozen: MemoryPane,
    /// Remaining columns of the current page
    pub scrolling: MemoryPane,
}

/// Sortable, pageable row set
#[derive(Debug, Clone)]
pub struct TableView {
    rows: Vec<Vec<String>>,
    heights: Vec<f32>,
    config: MergeConfig,
    page: usize,
}

impl TableView {
    /// Create a table and apply the configured sort.
    pub fn new(rows: Vec<Vec<String>>, config: MergeConfig) -> Result<Self> {
        config.validate()?;
        let heights = vec![config.row_height; rows.len()];
        let sort = config.sort.clone();
        let mut table = Self {
            rows,
            heights,
            config,
            page: 0,
        };
        table.sort(&sort);
        Ok(table)
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Override the height of a row (current order); returns false if out of range.
    pub fn set_row_height(&mut self, row: usize, height: f32) -> bool {
        match self.heights.get_mut(row) {
            Some(h) => {
                *h = height;
                true
            }
            None => false,
        }
    }

    /// Stable multi-key sort on lowercased string values; missing cells sort
    /// as empty. Rows tied on every key keep their current order.
    pub fn sort(&mut self, keys: &[SortKey]) {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.sort_by(|&a, &b| {
            let (Some(ra), Some(rb)) = (self.rows.get(a), self.rows.get(b)) else {
                return Ordering::Equal;
            };
            compare_rows(ra, rb, keys)
        });

        let mut rows = std::mem::take(&mut self.rows);
        let heights = std::mem::take(&mut self.heights);
        let mut sorted_rows = Vec::with_capacity(rows.len());
        let mut sorted_heights = Vec::with_capacity(rows.len());
        for idx in order {
            if let Some(row) = rows.get_mut(idx) {
                sorted_rows.push(std::mem::take(row));
                sorted_heights.push(heights.get(idx).copied().unwrap_or(self.config.row_height));
            }
        }
        self.rows = sorted_rows;
        self.heights = sorted_heights;
        self.config.sort = keys.to_vec();
        self.page = 0;
    }

    /// Number of pages (at least one, even when empty).
    pub fn page_count(&self) -> usize {
        match self.config.page_length {
            PageLength::All | PageLength::Rows(0) => 1,
            PageLength::Rows(n) => self.rows.len().div_ceil(n).max(1),
        }
    }

    /// Switch page, clamped to the last page.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Change page length and return to the first page.
    pub fn set_page_length(&mut self, len: PageLength) {
        self.config.page_length = len;
        self.page = 0;
    }

    fn page_range(&self) -> (usize, usize) {
        match self.config.page_length {
            PageLength::All | PageLength::Rows(0) => (0, self.rows.len()),
            PageLength::Rows(n) => {
                let start = (self.page * n).min(self.rows.len());
                let end = (start + n).min(self.rows.len());
                (start, end)
            }
        }
    }

    /// Materialize the current page.
    pub fn draw(&self) -> DrawEvent {
        let (start, end) = self.page_range();
        let split = self.config.frozen_columns;
        let mut frozen = Vec::with_capacity(end - start);
        let mut scrolling = Vec::with_capacity(end - start);

        for (row, &height) in self
            .rows
            .iter()
            .zip(&self.heights)
            .skip(start)
            .take(end - start)
        {
            let mut left: Vec<String> = row.iter().take(split).cloned().collect();
            left.resize(split, String::new());
            let right: Vec<String> = row.iter().skip(split).cloned().collect();
            frozen.push(MemoryRow {
                cells: left,
                height,
            });
            scrolling.push(MemoryRow {
                cells: right,
                height,
            });
        }

        DrawEvent {
            frozen: MemoryPane::new(frozen),
            scrolling: MemoryPane::new(scrolling),
        }
    }

    /// Draw the current page and run the merge callback on it.
    pub fn redraw(&self) -> Result<(DrawEvent, MergePlan)> {
        let mut event = self.draw();
        let plan = on_draw(&mut event.frozen, &event.scrolling, &self.config)?;
        Ok((event, plan))
    }
}

fn compare_rows(a: &[String], b: &[String], keys: &[SortKey]) -> Ordering {
    for key in keys {
        let va = a.get(key.column).map_or_else(String::new, |v| v.to_lowercase());
        let vb = b.get(key.column).map_or_else(String::new, |v| v.to_lowercase());
        let ord = match key.direction {
            SortDirection::Asc => va.cmp(&vb),
            SortDirection::Desc => vb.cmp(&va),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
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
    use crate::render::backend::PaneBackend;

    fn rows(data: &[(&str, &str)]) -> Vec<Vec<String>> {
        data.iter()
            .map(|(a, b)| vec![(*a).to_string(), (*b).to_string()])
            .collect()
    }

    #[test]
    fn test_default_sort_groups_values() {
        let table = TableView::new(
            rows(&[("B", "2"), ("A", "2"), ("B", "1"), ("A", "1")]),
            MergeConfig::default(),
        )
        .unwrap();
        let event = table.draw();
        assert_eq!(event.frozen.column(0), vec!["A", "A", "B", "B"]);
        assert_eq!(event.scrolling.column(0), vec!["1", "2", "1", "2"]);
    }

    #[test]
    fn test_paging() {
        let data: Vec<Vec<String>> = (0..23).map(|i| vec![format!("{:02}", i / 5)]).collect();
        let mut table = TableView::new(data, MergeConfig::default()).unwrap();
        assert_eq!(table.page_count(), 3);
        table.set_page(7);
        assert_eq!(table.page(), 2);
        assert_eq!(table.draw().frozen.row_count(), 3);

        table.set_page_length(PageLength::All);
        assert_eq!(table.page(), 0);
        assert_eq!(table.page_count(), 1);
        assert_eq!(table.draw().frozen.row_count(), 23);
    }

    #[test]
    fn test_empty_table() {
        let table = TableView::new(Vec::new(), MergeConfig::default()).unwrap();
        assert_eq!(table.page_count(), 1);
        let (event, plan) = table.redraw().unwrap();
        assert!(plan.is_empty());
        assert_eq!(event.frozen.row_count(), 0);
    }

    #[test]
    fn test_ragged_rows_pad_frozen_pane() {
        let config = MergeConfig {
            frozen_columns: 2,
            ..MergeConfig::default()
        };
        let table = TableView::new(vec![vec!["only".to_string()]], config).unwrap();
        let event = table.draw();
        assert_eq!(event.frozen.rows[0].cells, vec!["only", ""]);
        assert!(event.scrolling.rows[0].cells.is_empty());
    }

    #[test]
    fn test_row_height_follows_sort() {
        let mut table = TableView::new(rows(&[("A", "1"), ("B", "1")]), MergeConfig::default())
            .unwrap();
        assert!(table.set_row_height(1, 45.0));
        assert!(!table.set_row_height(9, 45.0));
        table.sort(&[SortKey::desc(0)]);
        assert_eq!(table.draw().frozen.heights(), vec![45.0, 20.0]);
    }
}
