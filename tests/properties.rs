//! Property-based tests for the filter engine.
//!
//! Tests invariants:
//! - The "All" selection is the identity
//! - Category filtering is sound and complete
//! - Low-stock detection is idempotent
//! - Status tabs never return records outside the tab
//! - Aggregates never panic and counts add up

use dishboard::engine::{
    compute_aggregates, compute_low_stock, filter_by_category, filter_by_search_query,
    filter_by_status_tab, percent, CategoryFilter, InventoryStats, TableStats, STAFF_TABS,
    TABLE_TABS,
};
use dishboard::{InventoryRecord, StaffRecord, StaffStatus, TableRecord, TableStatus};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_category() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Grains", "Spices", "Dairy", "Vegetables", "Meat", "Oil", "Frozen"])
        .prop_map(str::to_string)
}

fn arb_inventory() -> impl Strategy<Value = Vec<InventoryRecord>> {
    prop::collection::vec(
        ("[A-Za-z ]{1,12}", arb_category(), 0u32..200, 0u32..100, 0.0f64..5_000.0),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, quantity, min, price))| {
                InventoryRecord::new(i as u32 + 1, &name, &category, quantity, "kg", min, price)
            })
            .collect()
    })
}

fn arb_staff_status() -> impl Strategy<Value = StaffStatus> {
    prop::sample::select(StaffStatus::ALL.to_vec())
}

fn arb_staff() -> impl Strategy<Value = Vec<StaffRecord>> {
    prop::collection::vec(("[a-z]{1,10}", arb_staff_status()), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, status))| {
                StaffRecord::new(i as u32 + 1, &name, "Server", status, "Evening", "", "")
            })
            .collect()
    })
}

fn arb_tables() -> impl Strategy<Value = Vec<TableRecord>> {
    prop::collection::vec(
        (prop::sample::select(TableStatus::ALL.to_vec()), 1u32..12),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (status, capacity))| TableRecord::new(i as u32 + 1, capacity, status))
            .collect()
    })
}

fn ids(items: &[&InventoryRecord]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: the All chip returns the collection unchanged
    #[test]
    fn prop_all_is_identity(items in arb_inventory()) {
        let all = filter_by_category(&items, &CategoryFilter::All);
        let expected: Vec<u32> = items.iter().map(|item| item.id).collect();
        prop_assert_eq!(ids(&all), expected);
    }

    /// Property: every kept record has the category, and every record with it is kept
    #[test]
    fn prop_category_sound_and_complete(items in arb_inventory(), category in arb_category()) {
        let kept = filter_by_category(&items, &CategoryFilter::Only(category.clone()));

        for item in &kept {
            prop_assert_eq!(&item.category, &category);
        }
        let expected = items.iter().filter(|item| item.category == category).count();
        prop_assert_eq!(kept.len(), expected);
    }

    /// Property: low stock of low stock is the same set
    #[test]
    fn prop_low_stock_idempotent(items in arb_inventory()) {
        let once = compute_low_stock(&items);
        let twice = compute_low_stock(once.iter());
        prop_assert_eq!(&once, &twice);
        for item in once.iter() {
            prop_assert!(item.quantity <= item.min_threshold);
        }
    }

    /// Property: out-of-range tabs behave as "all", in-range tabs stay within their status
    #[test]
    fn prop_staff_tabs(staff in arb_staff(), tab in 0usize..10) {
        let visible = filter_by_status_tab(&staff, tab, &STAFF_TABS);
        match STAFF_TABS.status_for(tab) {
            Some(status) => {
                prop_assert!(visible.iter().all(|member| member.status == status));
                prop_assert_eq!(visible.len(), staff.iter().filter(|m| m.status == status).count());
            }
            None => prop_assert_eq!(visible.len(), staff.len()),
        }
    }

    /// Property: blank queries keep everything
    #[test]
    fn prop_blank_query_keeps_all(items in arb_inventory(), spaces in " {0,4}") {
        let visible = filter_by_search_query(&items, &spaces, |item: &InventoryRecord| [item.name.clone()]);
        prop_assert_eq!(visible.len(), items.len());
    }

    /// Property: inventory stats agree with the filters
    #[test]
    fn prop_inventory_stats(items in arb_inventory()) {
        let stats: InventoryStats = compute_aggregates(&items);
        prop_assert_eq!(stats.total_items, items.len());
        prop_assert_eq!(stats.low_stock_count, compute_low_stock(&items).count());
    }

    /// Property: table status counts sum to the total and occupancy stays in [0, 1]
    #[test]
    fn prop_table_stats(tables in arb_tables()) {
        let stats: TableStats = compute_aggregates(&tables);
        prop_assert_eq!(
            stats.available + stats.occupied + stats.reserved + stats.cleaning,
            stats.total_tables
        );
        let occupancy = stats.occupancy_ratio();
        prop_assert!((0.0..=1.0).contains(&occupancy));
        prop_assert!(percent(occupancy) <= 100);

        for tab in 0..TABLE_TABS.len() {
            prop_assert!(filter_by_status_tab(&tables, tab, &TABLE_TABS).len() <= tables.len());
        }
    }
}
