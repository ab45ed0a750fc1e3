//! Property-based integration tests for the table engine.
//!
//! These tests verify that the sort, pagination and view invariants hold
//! across generated inputs, using the `proptest` crate.

use std::collections::BTreeMap;

use krx_dashboard_core::columns::BOND_COLUMNS;
use krx_dashboard_core::pagination::{page_indicators, paginate, PageIndicator, PageOwnership};
use krx_dashboard_core::sort::{sort_records, SortDirection};
use krx_dashboard_core::view::{PageChange, TableData, TableView};
use krx_dashboard_market_data::{Fetched, Record};
use proptest::prelude::*;

type Row = BTreeMap<String, String>;

// =============================================================================
// Generators
// =============================================================================

fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

fn row(id: usize, value: String) -> Row {
    let mut row = BTreeMap::new();
    row.insert("id".to_string(), id.to_string());
    row.insert("v".to_string(), value);
    row
}

/// Rows with distinct numeric values, some rendered with separators.
fn arb_numeric_rows() -> impl Strategy<Value = Vec<Row>> {
    (
        proptest::collection::hash_set(-10_000_000i64..10_000_000, 0..60),
        any::<bool>(),
    )
        .prop_map(|(values, with_separators)| {
            values
                .into_iter()
                .enumerate()
                .map(|(id, v)| {
                    let text = if with_separators { grouped(v) } else { v.to_string() };
                    row(id, text)
                })
                .collect()
        })
}

/// Rows with distinct non-numeric names.
fn arb_text_rows() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::hash_set("[A-Za-z가-힣]{1,8}", 0..60).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(id, name)| row(id, name))
            .collect()
    })
}

fn ids(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|r| r.field("id").unwrap_or("").to_string())
        .collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Descending order is ascending order reversed on a numeric column
    /// without ties.
    #[test]
    fn prop_numeric_desc_is_reverse_of_asc(rows in arb_numeric_rows()) {
        let asc = sort_records(&rows, "v", SortDirection::Ascending);
        let desc = sort_records(&asc, "v", SortDirection::Descending);
        let mut reversed = asc.clone();
        reversed.reverse();
        prop_assert_eq!(desc, reversed);
    }

    /// Same property on a text column.
    #[test]
    fn prop_text_desc_is_reverse_of_asc(rows in arb_text_rows()) {
        let asc = sort_records(&rows, "v", SortDirection::Ascending);
        let desc = sort_records(&asc, "v", SortDirection::Descending);
        let mut reversed = asc.clone();
        reversed.reverse();
        prop_assert_eq!(desc, reversed);
    }

    /// Sorting by a constant column keeps the original order in both
    /// directions.
    #[test]
    fn prop_constant_column_is_stable(
        count in 0usize..80,
        value in prop_oneof![Just("100".to_string()), Just("-".to_string()), Just("국채".to_string())],
    ) {
        let rows: Vec<Row> = (0..count).map(|id| row(id, value.clone())).collect();
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_records(&rows, "v", direction);
            prop_assert_eq!(ids(&sorted), ids(&rows));
        }
    }

    /// Sorted output is always a permutation of the input.
    #[test]
    fn prop_sort_is_permutation(rows in arb_numeric_rows(), desc in any::<bool>()) {
        let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
        let sorted = sort_records(&rows, "v", direction);
        let mut before = ids(&rows);
        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// The window always lies inside the result set and the page is clamped.
    #[test]
    fn prop_window_is_in_range(total in 0usize..2_000, size in 0usize..60, page in 0usize..300) {
        let window = paginate(total, size, page);
        let effective = size.max(1);
        let expected_pages = std::cmp::max(1, total.div_ceil(effective));

        prop_assert_eq!(window.total_pages, expected_pages);
        prop_assert!(window.page >= 1 && window.page <= window.total_pages);
        prop_assert!(window.start <= window.end);
        prop_assert!(window.end <= total);
        prop_assert!(window.end - window.start <= effective);
        if total > 0 {
            prop_assert!(window.end > window.start);
        }
    }

    /// Consecutive pages tile the result set without gaps or overlap.
    #[test]
    fn prop_pages_tile_result(total in 0usize..500, size in 1usize..40) {
        let pages = paginate(total, size, 1).total_pages;
        let mut covered = 0;
        for page in 1..=pages {
            let window = paginate(total, size, page);
            prop_assert_eq!(window.start, covered);
            covered = window.end;
        }
        prop_assert_eq!(covered, total);
    }

    /// The strip holds the first page, the last page and every page near the
    /// current one, in order, with one ellipsis per gap.
    #[test]
    fn prop_indicator_strip_shape(total in 1usize..200, current in 1usize..200) {
        let current = current.min(total);
        let strip = page_indicators(current, total);

        let pages: Vec<usize> = strip
            .iter()
            .filter_map(|i| match i {
                PageIndicator::Page(n) => Some(*n),
                PageIndicator::Ellipsis => None,
            })
            .collect();

        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        for near in current.saturating_sub(2).max(1)..=(current + 2).min(total) {
            prop_assert!(pages.contains(&near));
        }

        for (i, indicator) in strip.iter().enumerate() {
            if *indicator == PageIndicator::Ellipsis {
                let (PageIndicator::Page(before), PageIndicator::Page(after)) = (strip[i - 1], strip[i + 1]) else {
                    return Err(TestCaseError::fail("ellipsis must sit between pages"));
                };
                prop_assert!(after > before + 1);
            }
        }
        for pair in strip.windows(2) {
            if let (PageIndicator::Page(a), PageIndicator::Page(b)) = (pair[0], pair[1]) {
                prop_assert_eq!(b, a + 1);
            }
        }
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_bond_table_page_two_by_closing_price() {
    // 23 bonds with distinct closing prices in scrambled order
    let rows: Vec<Row> = (0..23usize)
        .map(|i| {
            let price = 9_500 + ((i * 7) % 23) * 13;
            let mut row = BTreeMap::new();
            row.insert("isuNm".to_string(), format!("국고채권 {:02}", i));
            row.insert("clsprc".to_string(), grouped(price as i64));
            row
        })
        .collect();

    let mut expected: Vec<Row> = rows.clone();
    expected.sort_by_key(|r| {
        std::cmp::Reverse(
            r.field("clsprc")
                .unwrap_or("0")
                .replace(',', "")
                .parse::<i64>()
                .unwrap_or(0),
        )
    });

    let mut view: TableView<Row> = TableView::new(BOND_COLUMNS, PageOwnership::Client);
    let ticket = view.begin_fetch(1);
    assert!(view.apply(ticket, Fetched::ok(TableData::from_rows(rows))));

    assert!(view.sort_by("clsprc"));
    assert!(view.sort_by("clsprc"));
    assert_eq!(view.sort_state().direction, SortDirection::Descending);
    assert_eq!(view.go_to_page(2), PageChange::Local(2));

    let visible: Vec<&Row> = view.visible_rows();
    assert_eq!(visible.len(), 10);
    for (offset, row) in visible.iter().enumerate() {
        assert_eq!(*row, &expected[10 + offset], "rank {}", 11 + offset);
    }
    assert_eq!(view.first_rank(), 11);
}

#[test]
fn test_failed_fetch_shows_empty_state_not_stale_rows() {
    let rows: Vec<Row> = (0..15).map(|i| row(i, i.to_string())).collect();
    let mut view: TableView<Row> = TableView::new(BOND_COLUMNS, PageOwnership::Client);
    let ticket = view.begin_fetch(1);
    view.apply(ticket, Fetched::ok(TableData::from_rows(rows)));
    assert_eq!(view.visible_rows().len(), 10);

    let ticket = view.begin_fetch(1);
    view.apply(
        ticket,
        Fetched::failed(krx_dashboard_market_data::FetchError::Parse {
            url: "http://localhost:8080/api/bond/trading-info/SMALL".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        }),
    );
    assert!(view.visible_rows().is_empty());
    assert!(view.empty_message().is_some());
}
