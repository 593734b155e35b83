//! DOM adapter: a pane body backed by a live `<tbody>` element.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{merge_pane, on_draw, PaneBackend};
use crate::error::{Result, RowmergeError};
use crate::types::{MergeConfig, MergePlan};

/// Pane body backed by a `<tbody>`
///
/// Rows are the `<tr>` children of the body, collected once when the pane
/// is created and kept in sync with every removal. Cells are the
/// `<td>`/`<th>` children of each row.
pub struct DomPane {
    body: HtmlElement,
    rows: Vec<HtmlElement>,
}

impl DomPane {
    /// Wrap a `<tbody>` directly, or find the first `<tbody>` inside a
    /// table or scroll wrapper.
    pub fn from_element(element: HtmlElement) -> Result<Self> {
        let body = if element.tag_name().eq_ignore_ascii_case("tbody") {
            element
        } else {
            element
                .query_selector("tbody")
                .map_err(|e| RowmergeError::Dom(format!("{e:?}")))?
                .ok_or_else(|| RowmergeError::Dom("no <tbody> in pane".to_string()))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| RowmergeError::Dom("<tbody> is not an HtmlElement".to_string()))?
        };
        let rows = children_with_tag(&body, &["tr"]);
        Ok(Self { body, rows })
    }

    fn row(&self, row: usize) -> Result<&HtmlElement> {
        self.rows.get(row).ok_or(RowmergeError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })
    }
}

fn children_with_tag(parent: &Element, tags: &[&str]) -> Vec<HtmlElement> {
    let children = parent.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter(|el| tags.iter().any(|t| el.tag_name().eq_ignore_ascii_case(t)))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

impl PaneBackend for DomPane {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_text(&self, row: usize, col: usize) -> Result<String> {
        let cells = children_with_tag(self.row(row)?, &["td", "th"]);
        let columns = cells.len();
        cells
            .into_iter()
            .nth(col)
            .map(|cell| cell.text_content().unwrap_or_default())
            .ok_or(RowmergeError::ColumnOutOfRange {
                column: col,
                columns,
            })
    }

    fn row_height(&self, row: usize) -> Result<f32> {
        #[allow(clippy::cast_possible_truncation)]
        let height = self.row(row)?.get_bounding_client_rect().height() as f32;
        Ok(height)
    }

    fn remove_row(&mut self, row: usize) -> Result<()> {
        let tr = self.row(row)?;
        self.body
            .remove_child(tr)
            .map_err(|e| RowmergeError::Dom(format!("{e:?}")))?;
        self.rows.remove(row);
        Ok(())
    }

    fn set_row_height(&mut self, row: usize, height: f32) -> Result<()> {
        self.row(row)?
            .style()
            .set_property("height", &format!("{height}px"))
            .map_err(|e| RowmergeError::Dom(format!("{e:?}")))
    }
}

/// Merge the frozen pane of a redrawn table.
///
/// `scrolling` is the unmerged body the frozen rows must stay aligned with.
/// Without it the row-count check cannot run and the frozen pane is merged
/// on its own.
///
/// # Errors
/// Returns [`RowmergeError::PaneMismatch`] if the panes differ in row count,
/// or [`RowmergeError::Dom`] if a pane has no `<tbody>`.
pub fn merge_dom_panes(
    frozen: HtmlElement,
    scrolling: Option<HtmlElement>,
    config: &MergeConfig,
) -> Result<MergePlan> {
    let mut frozen = DomPane::from_element(frozen)?;
    match scrolling {
        Some(el) => {
            let scrolling = DomPane::from_element(el)?;
            on_draw(&mut frozen, &scrolling, config)
        }
        None => {
            log::warn!("no scrolling pane given; merging frozen pane without alignment check");
            merge_pane(&mut frozen, config)
        }
    }
}
