//! Record collections the screens are built from.
//!
//! Screens never own a data store: on entry they ask a [`FixtureSource`] for
//! fresh copies of the collections they show and drop them on exit. Two
//! sources exist:
//!
//! - [`Builtin`]: the bundled sample data in [`builtin`]
//! - [`FixtureSet`]: collections loaded from a JSON file (see [`json`])
//!
//! # Examples
//!
//! ```
//! use dishboard::fixtures::{Builtin, FixtureSource};
//!
//! let staff = Builtin.staff();
//! assert_eq!(staff.len(), 5);
//! ```

pub mod builtin;
pub mod json;

pub use builtin::{inventory, menu, orders, orders_at, staff, tables};
pub use json::{FixtureSet, FIXTURE_VERSION};

use crate::domain::{InventoryRecord, MenuRecord, OrderRecord, StaffRecord, TableRecord};

/// Supplies a fresh copy of each collection whenever a screen is entered.
pub trait FixtureSource {
    fn inventory(&self) -> Vec<InventoryRecord>;

    fn menu(&self) -> Vec<MenuRecord>;

    /// Orders, with any relative timestamps anchored at `now_millis`.
    fn orders(&self, now_millis: i64) -> Vec<OrderRecord>;

    fn staff(&self) -> Vec<StaffRecord>;

    fn tables(&self) -> Vec<TableRecord>;
}

/// The bundled sample data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtin;

impl FixtureSource for Builtin {
    fn inventory(&self) -> Vec<InventoryRecord> {
        builtin::inventory()
    }

    fn menu(&self) -> Vec<MenuRecord> {
        builtin::menu()
    }

    fn orders(&self, now_millis: i64) -> Vec<OrderRecord> {
        builtin::orders_at(now_millis)
    }

    fn staff(&self) -> Vec<StaffRecord> {
        builtin::staff()
    }

    fn tables(&self) -> Vec<TableRecord> {
        builtin::tables()
    }
}
