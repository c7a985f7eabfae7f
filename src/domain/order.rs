//! Kitchen orders and their line items.

use super::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of milliseconds in one minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Number of milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Number of milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Where an order sits in the kitchen workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Still in the kitchen: neither delivered nor cancelled.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::New | Self::Preparing | Self::Ready)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dish line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl LineItem {
    #[must_use]
    pub fn new(name: &str, quantity: u32, price: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            price,
        }
    }

    /// Unit price times quantity, exact to the cent.
    #[must_use]
    pub fn line_total(&self) -> Money {
        Money::from_amount(self.price).times(self.quantity)
    }
}

/// An order placed for a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub table_number: u32,
    pub line_items: Vec<LineItem>,
    pub status: OrderStatus,
    pub timestamp_millis: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl OrderRecord {
    #[must_use]
    pub fn new(
        id: &str,
        table_number: u32,
        line_items: Vec<LineItem>,
        status: OrderStatus,
        timestamp_millis: i64,
    ) -> Self {
        Self {
            id: id.to_string(),
            table_number,
            line_items,
            status,
            timestamp_millis,
            special_instructions: None,
        }
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: &str) -> Self {
        self.special_instructions = Some(instructions.to_string());
        self
    }

    /// Sum of `price * quantity` over all line items.
    #[must_use]
    pub fn total(&self) -> Money {
        self.line_items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of dishes across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.line_items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Returns a human-readable string describing how long ago the order was placed.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute (or in the future): "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "15m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "2d ago")
    ///
    /// # Examples
    ///
    /// ```
    /// use dishboard::{OrderRecord, OrderStatus};
    ///
    /// let now = 1_700_000_000_000;
    /// let order = OrderRecord::new("2", 3, vec![], OrderStatus::Preparing, now - 900_000);
    /// assert_eq!(order.time_ago(now), "15m ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self, now_millis: i64) -> String {
        let diff = now_millis.saturating_sub(self.timestamp_millis);

        if diff < MILLIS_PER_MINUTE {
            "just now".to_string()
        } else if diff < MILLIS_PER_HOUR {
            let mins = diff / MILLIS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < MILLIS_PER_DAY {
            let hours = diff / MILLIS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / MILLIS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn butter_chicken_order() -> OrderRecord {
        OrderRecord::new(
            "1",
            5,
            vec![
                LineItem::new("Butter Chicken", 2, 299.99),
                LineItem::new("Naan", 4, 49.99),
            ],
            OrderStatus::New,
            0,
        )
    }

    #[test]
    fn total_is_exact_to_the_cent() {
        let order = butter_chicken_order();
        assert_eq!(order.total().cents(), 79994);
        assert_eq!(order.total().to_string(), "799.94");
        assert_eq!(order.item_count(), 6);
    }

    #[test]
    fn empty_order_totals_zero() {
        let order = OrderRecord::new("x", 1, vec![], OrderStatus::New, 0);
        assert_eq!(order.total(), Money::ZERO);
    }

    #[test]
    fn time_ago_buckets() {
        let order = butter_chicken_order();
        assert_eq!(order.time_ago(30_000), "just now");
        assert_eq!(order.time_ago(-5), "just now");
        assert_eq!(order.time_ago(1_800_000), "30m ago");
        assert_eq!(order.time_ago(3 * MILLIS_PER_HOUR), "3h ago");
        assert_eq!(order.time_ago(2 * MILLIS_PER_DAY + 1), "2d ago");
    }

    #[test]
    fn pending_covers_kitchen_states() {
        assert!(OrderStatus::Ready.is_pending());
        assert!(!OrderStatus::Delivered.is_pending());
        assert!(!OrderStatus::Cancelled.is_pending());
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let order = OrderRecord::new(
            "x",
            1,
            vec![LineItem::new("Naan", u32::MAX, 49.99), LineItem::new("Dal", u32::MAX, 199.99)],
            OrderStatus::New,
            i64::MIN,
        );
        assert_eq!(order.item_count(), u32::MAX);
        assert!(order.time_ago(1).ends_with("d ago"));
    }
}
