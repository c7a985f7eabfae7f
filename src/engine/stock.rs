//! Low-stock detection and the alert banner derived from it.

use crate::domain::InventoryRecord;

/// Number of low-stock items listed in the banner before it summarizes the rest.
pub const ALERT_PREVIEW_LIMIT: usize = 3;

/// Inventory items at or below their reorder threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStock<'a> {
    pub items: Vec<&'a InventoryRecord>,
}

impl<'a> LowStock<'a> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates the matching items, so the result can be fed back into
    /// [`compute_low_stock`].
    pub fn iter(&self) -> impl Iterator<Item = &'a InventoryRecord> + '_ {
        self.items.iter().copied()
    }
}

/// Selects the items with `quantity <= min_threshold`, in input order.
///
/// Idempotent: running it over its own output returns the same items.
///
/// ```
/// use dishboard::engine::compute_low_stock;
/// use dishboard::InventoryRecord;
///
/// let items = vec![
///     InventoryRecord::new(1, "Saffron", "Spices", 2, "g", 2, 600.0),
///     InventoryRecord::new(2, "Rice", "Grains", 50, "kg", 20, 85.0),
/// ];
/// let low = compute_low_stock(&items);
/// assert_eq!(low.count(), 1);
/// assert_eq!(compute_low_stock(low.iter()), low);
/// ```
pub fn compute_low_stock<'a, I>(records: I) -> LowStock<'a>
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    LowStock {
        items: records
            .into_iter()
            .filter(|item| item.is_low_stock())
            .collect(),
    }
}

/// The low-stock warning card: up to [`ALERT_PREVIEW_LIMIT`] item lines plus an
/// overflow line for the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockAlert {
    pub title: String,
    pub lines: Vec<String>,
    pub overflow: Option<String>,
    pub total: usize,
}

impl LowStockAlert {
    /// Builds the banner, or `None` when nothing is low.
    #[must_use]
    pub fn from_low_stock(low: &LowStock<'_>) -> Option<Self> {
        if low.is_empty() {
            return None;
        }

        let total = low.count();
        let lines = low
            .items
            .iter()
            .take(ALERT_PREVIEW_LIMIT)
            .map(|item| item.stock_line())
            .collect();
        let overflow = (total > ALERT_PREVIEW_LIMIT)
            .then(|| format!("And {} more items", total - ALERT_PREVIEW_LIMIT));

        Some(Self {
            title: "Low Stock Alert".to_string(),
            lines,
            overflow,
            total,
        })
    }

    /// Shorthand for [`compute_low_stock`] followed by [`LowStockAlert::from_low_stock`].
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a InventoryRecord>,
    {
        Self::from_low_stock(&compute_low_stock(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, quantity: u32, min_threshold: u32) -> InventoryRecord {
        InventoryRecord::new(id, &format!("Item {id}"), "Spices", quantity, "kg", min_threshold, 10.0)
    }

    #[test]
    fn threshold_comparison_is_inclusive() {
        let items = vec![item(1, 5, 5), item(2, 6, 5), item(3, 4, 5)];
        let ids: Vec<u32> = compute_low_stock(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn no_banner_when_nothing_is_low() {
        let items = vec![item(1, 15, 5), item(2, 8, 5)];
        assert!(LowStockAlert::from_records(&items).is_none());
    }

    #[test]
    fn banner_lists_three_and_summarizes_the_rest() {
        let items: Vec<InventoryRecord> = (1..=5).map(|id| item(id, 1, 5)).collect();
        let alert = LowStockAlert::from_records(&items).unwrap();
        assert_eq!(alert.lines.len(), 3);
        assert_eq!(alert.lines[0], "Item 1: 1/5 kg");
        assert_eq!(alert.overflow.as_deref(), Some("And 2 more items"));
        assert_eq!(alert.total, 5);
    }

    #[test]
    fn exactly_three_has_no_overflow() {
        let items: Vec<InventoryRecord> = (1..=3).map(|id| item(id, 0, 5)).collect();
        let alert = LowStockAlert::from_records(&items).unwrap();
        assert_eq!(alert.lines.len(), 3);
        assert!(alert.overflow.is_none());
    }
}
