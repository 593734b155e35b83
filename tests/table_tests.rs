//! Table model tests: sorting, paging and redraw behaviour.
//!
//! Every redraw materializes only the current page, so merging is limited to
//! the rows of one draw and depends on the sort keeping equal values adjacent.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{assert_pane, table_rows, ROW};
use rowmerge::csv::{parse_delimited, split_header, Delimiter};
use rowmerge::render::PaneBackend;
use rowmerge::table::TableView;
use rowmerge::{MergeConfig, PageLength, SortKey};

fn endpoints() -> Vec<Vec<String>> {
    table_rows(&[
        &["users", "GET", "/users"],
        &["orders", "POST", "/orders"],
        &["users", "POST", "/users"],
        &["orders", "GET", "/orders"],
        &["users", "DELETE", "/users/{id}"],
        &["health", "GET", "/health"],
    ])
}

fn all_rows() -> MergeConfig {
    MergeConfig {
        page_length: PageLength::All,
        ..MergeConfig::default()
    }
}

#[test]
fn test_sorted_table_merges_runs() {
    let table = TableView::new(endpoints(), all_rows()).unwrap();
    let (event, plan) = table.redraw().unwrap();

    assert_pane(
        &event.frozen,
        &["health", "orders", "users"],
        &[ROW, 2.0 * ROW, 3.0 * ROW],
    );
    assert_eq!(event.scrolling.row_count(), 6);
    assert_eq!(plan.total_height(), 6.0 * ROW);
}

#[test]
fn test_sort_breaking_adjacency_keeps_groups_apart() {
    let mut table = TableView::new(endpoints(), all_rows()).unwrap();
    // Method-first ordering interleaves resources
    table.sort(&[SortKey::asc(1), SortKey::asc(0)]);
    let (event, plan) = table.redraw().unwrap();

    // DELETE users | GET health, orders, users | POST orders, users
    assert_eq!(
        event.frozen.column(0),
        vec!["users", "health", "orders", "users", "orders", "users"]
    );
    assert!(plan.is_identity());
}

#[test]
fn test_descending_sort() {
    let mut table = TableView::new(endpoints(), all_rows()).unwrap();
    table.sort(&[SortKey::desc(0)]);
    let (event, _) = table.redraw().unwrap();
    assert_eq!(event.frozen.column(0), vec!["users", "orders", "health"]);
}

#[test]
fn test_merge_stops_at_page_boundary() {
    let data: Vec<Vec<String>> = (0..6).map(|i| vec!["A".to_string(), i.to_string()]).collect();
    let config = MergeConfig {
        page_length: PageLength::Rows(4),
        ..MergeConfig::default()
    };
    let mut table = TableView::new(data, config).unwrap();

    let (first, _) = table.redraw().unwrap();
    assert_pane(&first.frozen, &["A"], &[4.0 * ROW]);

    table.set_page(1);
    let (second, _) = table.redraw().unwrap();
    assert_pane(&second.frozen, &["A"], &[2.0 * ROW]);

    table.set_page_length(PageLength::All);
    let (all, _) = table.redraw().unwrap();
    assert_pane(&all.frozen, &["A"], &[6.0 * ROW]);
}

#[test]
fn test_custom_row_heights() {
    let mut table = TableView::new(endpoints(), all_rows()).unwrap();
    // Sorted order: health, orders, orders, users, users, users
    assert!(table.set_row_height(1, 35.0));
    assert!(table.set_row_height(5, 50.0));
    let (event, _) = table.redraw().unwrap();
    assert_eq!(event.frozen.heights(), vec![ROW, 35.0 + ROW, 2.0 * ROW + 50.0]);
}

#[test]
fn test_wide_frozen_pane_merges_selected_column() {
    let config = MergeConfig {
        frozen_columns: 2,
        merge_column: 1,
        page_length: PageLength::All,
        sort: vec![SortKey::asc(1)],
        ..MergeConfig::default()
    };
    let table = TableView::new(endpoints(), config).unwrap();
    let (event, plan) = table.redraw().unwrap();
    assert_eq!(event.frozen.column(1), vec!["DELETE", "GET", "POST"]);
    assert_eq!(plan.heights(), vec![ROW, 3.0 * ROW, 2.0 * ROW]);
    assert_eq!(event.scrolling.rows[0].cells.len(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let config = MergeConfig {
        frozen_columns: 0,
        ..MergeConfig::default()
    };
    assert!(TableView::new(endpoints(), config).is_err());
}

#[test]
fn test_csv_to_merged_pane() {
    let csv = b"resource,method\nusers,GET\nusers,POST\norders,GET\n";
    let (header, rows) = split_header(parse_delimited(csv, Delimiter::Comma));
    assert_eq!(header.unwrap(), vec!["resource", "method"]);

    let table = TableView::new(rows, all_rows()).unwrap();
    let (event, plan) = table.redraw().unwrap();

    assert_pane(&event.frozen, &["orders", "users"], &[ROW, 2.0 * ROW]);
    assert_eq!(plan.total_height(), 3.0 * ROW);
    assert_eq!(plan.groups[1].first_row, 1);
}

#[test]
fn test_sort_ignores_case() {
    let data = table_rows(&[&["Zeta", "1"], &["alpha", "2"], &["zeta", "3"], &["Alpha", "4"]]);
    let table = TableView::new(data, all_rows()).unwrap();
    let event = table.draw();
    assert_eq!(event.frozen.column(0), vec!["alpha", "Alpha", "Zeta", "zeta"]);
}
