//! Inventory stock records.

use serde::{Deserialize, Serialize};

/// One stocked ingredient or supply.
///
/// `category` is free-form; the inventory screen matches it against a fixed
/// chip set (see [`INVENTORY_CATEGORIES`]) but records may carry any string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub min_threshold: u32,
    pub price: f64,
}

/// Category chips offered by the inventory screen, in display order.
///
/// `"All"` is the no-filter sentinel.
pub const INVENTORY_CATEGORIES: [&str; 7] = [
    "All",
    "Grains",
    "Spices",
    "Dairy",
    "Vegetables",
    "Meat",
    "Oil",
];

impl InventoryRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(
        id: u32,
        name: &str,
        category: &str,
        quantity: u32,
        unit: &str,
        min_threshold: u32,
        price: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit: unit.to_string(),
            min_threshold,
            price,
        }
    }

    /// Whether stock has fallen to or below the reorder threshold.
    ///
    /// The comparison is inclusive: an item sitting exactly at its threshold
    /// is already low.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_threshold
    }

    /// Stock level as shown in the low-stock banner, e.g. `Garam Masala: 8/5 kg`.
    #[must_use]
    pub fn stock_line(&self) -> String {
        format!(
            "{}: {}/{} {}",
            self.name, self.quantity, self.min_threshold, self.unit
        )
    }
}
