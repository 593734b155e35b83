//! rowmerge - row-group merging for frozen table columns
//!
//! Collapses consecutive rows that share a value in the frozen (fixed) column
//! of a data table into one visually merged cell whose height is the sum of
//! the rows it replaces, keeping it aligned with the unmerged scrolling pane:
//! - Pure merge computation over row values and heights
//! - Pluggable pane backends (DOM on wasm32, in-memory elsewhere)
//! - A sortable, pageable table model for driving redraws natively
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { merge_frozen_column } from 'rowmerge';
//! await init();
//! // `right` in fnDrawCallback is the right-fixed clone (null without
//! // right-fixed columns); align against the table's own body instead.
//! new FixedColumns(table, {
//!     fnDrawCallback: (left) =>
//!         merge_frozen_column(left.body, table.fnSettings().nTBody),
//! });
//! ```

pub mod csv;
pub mod error;
pub mod merge;
pub mod render;
pub mod table;
pub mod types;

use wasm_bindgen::prelude::*;

pub use error::{Result, RowmergeError};
pub use merge::{compute_plan, compute_plan_from_parts};
pub use types::*;

/// Install the panic hook and console logger when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A logger may already be installed by a host bundle
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Merge the frozen column of a redrawn table in place.
///
/// # Arguments
/// * `left` - Frozen pane body (or an element containing its `<tbody>`)
/// * `right` - Scrolling table body, used for the row-count check only;
///   `null`/`undefined` merges the frozen pane without the check
/// * `config` - Optional `MergeConfig` object; `undefined` uses defaults
///
/// # Returns
/// The applied merge plan as a JavaScript object
///
/// # Errors
/// Returns an error if the panes differ in row count or the DOM cannot be read.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn merge_frozen_column(
    left: Option<web_sys::HtmlElement>,
    right: Option<web_sys::HtmlElement>,
    config: JsValue,
) -> std::result::Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let left = left.ok_or_else(|| RowmergeError::Dom("frozen pane is null".to_string()))?;
    let plan = render::merge_dom_panes(left, right, &config)?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

#[cfg(target_arch = "wasm32")]
fn config_from_js(config: JsValue) -> std::result::Result<MergeConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(MergeConfig::default());
    }
    let config: MergeConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Config error: {e}")))?;
    config.validate()?;
    Ok(config)
}

/// Compute merge groups for a column of values and their row heights
///
/// This is the pure computation behind `merge_frozen_column`, for hosts that
/// apply the result themselves.
///
/// # Errors
/// Returns an error if the inputs differ in length or a height is invalid.
#[wasm_bindgen]
pub fn compute_merge(
    values: Vec<String>,
    heights: Vec<f32>,
) -> std::result::Result<JsValue, JsValue> {
    let plan = compute_plan_from_parts(&values, &heights)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Compute merge groups and return them as a JSON string.
///
/// # Errors
/// Returns an error if the inputs differ in length or a height is invalid.
#[wasm_bindgen]
pub fn compute_merge_json(
    values: Vec<String>,
    heights: Vec<f32>,
) -> std::result::Result<String, JsValue> {
    let plan = compute_plan_from_parts(&values, &heights)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&plan)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
