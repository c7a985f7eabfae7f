//! The view filter engine.
//!
//! Pure, synchronous transforms from `(collection, selection)` to
//! `(visible subset, derived stats)`. Nothing in this module holds state,
//! performs I/O or returns an error: missing or unmatched selections degrade
//! to empty views and zero counts, and every ratio guards a zero denominator.
//!
//! # Modules
//!
//! - [`filter`]: category, status-tab and search filters
//! - [`stock`]: low-stock detection and the alert banner
//! - [`aggregate`]: per-record-type summary stats, revenue, ratios
//! - [`report`]: time ranges, completion counts and popular items
//!
//! # Example
//!
//! ```
//! use dishboard::engine::{compute_aggregates, filter_by_status_tab, STAFF_TABS};
//! use dishboard::fixtures;
//!
//! let staff = fixtures::staff();
//! let active = filter_by_status_tab(&staff, 1, &STAFF_TABS);
//! assert_eq!(active.len(), 3);
//!
//! let stats = compute_aggregates(&staff);
//! assert_eq!(stats.on_leave_count, 1);
//! ```

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod stock;

pub use aggregate::{
    compute_aggregates, order_total, percent, ratio, revenue, Aggregate, InventoryStats,
    MenuStats, OrderStats, StaffStats, TableStats,
};
pub use filter::{
    filter_by_category, filter_by_search_query, filter_by_status_tab, search, Categorized,
    CategoryFilter, HasStatus, SearchQuery, Searchable, StatusTab, StatusTabs, ALL_SENTINEL,
    ORDER_TABS, STAFF_TABS, TABLE_TABS,
};
pub use report::{compute_report, filter_by_time_range, popular_items, PopularItem, ReportStats, TimeRange};
pub use stock::{compute_low_stock, LowStock, LowStockAlert, ALERT_PREVIEW_LIMIT};
