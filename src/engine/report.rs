//! Sales report figures: time-range filtering, completion counts and the
//! popular-items ranking.

use crate::domain::{Money, OrderRecord, OrderStatus};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Report period tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum TimeRange {
    #[default]
    Today,
    ThisWeek,
    ThisMonth,
    ThisYear,
}

impl TimeRange {
    pub const ALL: [Self; 4] = [Self::Today, Self::ThisWeek, Self::ThisMonth, Self::ThisYear];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::ThisYear => "This Year",
        }
    }

    /// Parses a label case-insensitively (`"this week"`, `"This-Week"`, `"week"`).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized: String = label
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.trim_start_matches("this") {
            "today" => Some(Self::Today),
            "week" => Some(Self::ThisWeek),
            "month" => Some(Self::ThisMonth),
            "year" => Some(Self::ThisYear),
            _ => None,
        }
    }

    /// Whether `timestamp_millis` falls in the same calendar period (UTC) as `now`.
    ///
    /// Weeks are ISO weeks starting on Monday. Timestamps that cannot be
    /// represented as a date are never contained.
    #[must_use]
    pub fn contains(self, timestamp_millis: i64, now: DateTime<Utc>) -> bool {
        let Some(at) = DateTime::<Utc>::from_timestamp_millis(timestamp_millis) else {
            return false;
        };
        match self {
            Self::Today => at.date_naive() == now.date_naive(),
            Self::ThisWeek => at.iso_week() == now.iso_week(),
            Self::ThisMonth => at.year() == now.year() && at.month() == now.month(),
            Self::ThisYear => at.year() == now.year(),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keeps the orders placed within `range` of `now`, in input order.
pub fn filter_by_time_range<'a, I>(orders: I, range: TimeRange, now: DateTime<Utc>) -> Vec<&'a OrderRecord>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    orders
        .into_iter()
        .filter(|order| range.contains(order.timestamp_millis, now))
        .collect()
}

/// A dish ranked by how much of it sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularItem {
    pub name: String,
    pub quantity_sold: u32,
    pub revenue: Money,
}

/// Headline figures of the reports screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub total_orders: usize,
    /// Delivered orders.
    pub completed: usize,
    /// New, preparing or ready orders.
    pub pending: usize,
    pub cancelled: usize,
    /// Revenue of every order that was not cancelled.
    pub revenue: Money,
    /// `revenue / (total_orders - cancelled)`, zero when nothing sold.
    pub average_order_value: Money,
    pub popular_items: Vec<PopularItem>,
}

/// Builds the report over a set of orders (typically one time range).
///
/// Cancelled orders count towards `total_orders` and `cancelled` but not
/// towards revenue or the popular-items ranking. At most `popular_limit`
/// items are ranked.
pub fn compute_report<'a, I>(orders: I, popular_limit: usize) -> ReportStats
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut stats = ReportStats::default();
    let mut sold: Vec<&'a OrderRecord> = Vec::new();

    for order in orders {
        stats.total_orders += 1;
        match order.status {
            OrderStatus::Delivered => stats.completed += 1,
            OrderStatus::Cancelled => {
                stats.cancelled += 1;
                continue;
            }
            _ => stats.pending += 1,
        }
        stats.revenue += order.total();
        sold.push(order);
    }

    stats.average_order_value = stats.revenue.average_over(sold.len());
    stats.popular_items = popular_items(sold, popular_limit);
    stats
}

/// Ranks dishes by quantity sold, then revenue, then name.
pub fn popular_items<'a, I>(orders: I, limit: usize) -> Vec<PopularItem>
where
    I: IntoIterator<Item = &'a OrderRecord>,
{
    let mut by_name: HashMap<&'a str, PopularItem> = HashMap::new();

    for order in orders {
        for item in &order.line_items {
            let entry = by_name.entry(item.name.as_str()).or_insert_with(|| PopularItem {
                name: item.name.clone(),
                quantity_sold: 0,
                revenue: Money::ZERO,
            });
            entry.quantity_sold = entry.quantity_sold.saturating_add(item.quantity);
            entry.revenue += item.line_total();
        }
    }

    let mut ranked: Vec<PopularItem> = by_name.into_values().collect();
    ranked.sort_by(|a, b| {
        b.quantity_sold
            .cmp(&a.quantity_sold)
            .then_with(|| b.revenue.cmp(&a.revenue))
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineItem;
    use chrono::TimeZone;

    fn noon(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn order(id: &str, status: OrderStatus, at: DateTime<Utc>, items: Vec<LineItem>) -> OrderRecord {
        OrderRecord::new(id, 1, items, status, at.timestamp_millis())
    }

    #[test]
    fn time_range_boundaries() {
        // Wednesday
        let now = noon(2024, 5, 15);
        let monday = noon(2024, 5, 13).timestamp_millis();
        let previous_sunday = noon(2024, 5, 12).timestamp_millis();
        let first_of_month = noon(2024, 5, 1).timestamp_millis();
        let january = noon(2024, 1, 2).timestamp_millis();

        assert!(TimeRange::Today.contains(now.timestamp_millis(), now));
        assert!(!TimeRange::Today.contains(monday, now));
        assert!(TimeRange::ThisWeek.contains(monday, now));
        assert!(!TimeRange::ThisWeek.contains(previous_sunday, now));
        assert!(TimeRange::ThisMonth.contains(first_of_month, now));
        assert!(!TimeRange::ThisMonth.contains(january, now));
        assert!(TimeRange::ThisYear.contains(january, now));
    }

    #[test]
    fn from_label_variants() {
        assert_eq!(TimeRange::from_label("This Week"), Some(TimeRange::ThisWeek));
        assert_eq!(TimeRange::from_label("month"), Some(TimeRange::ThisMonth));
        assert_eq!(TimeRange::from_label("TODAY"), Some(TimeRange::Today));
        assert_eq!(TimeRange::from_label("decade"), None);
    }

    #[test]
    fn report_excludes_cancelled_from_revenue() {
        let now = noon(2024, 5, 15);
        let orders = vec![
            order("1", OrderStatus::Delivered, now, vec![LineItem::new("Naan", 4, 49.99)]),
            order("2", OrderStatus::Preparing, now, vec![LineItem::new("Lassi", 1, 79.99)]),
            order("3", OrderStatus::Cancelled, now, vec![LineItem::new("Biryani", 9, 349.99)]),
        ];

        let report = compute_report(&orders, 5);
        assert_eq!(report.total_orders, 3);
        assert_eq!(report.completed, 1);
        assert_eq!(report.pending, 1);
        assert_eq!(report.cancelled, 1);
        assert_eq!(report.revenue.to_string(), "279.95");
        assert_eq!(report.average_order_value.to_string(), "139.98");
        assert_eq!(report.popular_items.len(), 2);
        assert_eq!(report.popular_items[0].name, "Naan");
    }

    #[test]
    fn empty_report_is_zero() {
        let report = compute_report(&Vec::<OrderRecord>::new(), 5);
        assert_eq!(report, ReportStats::default());
    }

    #[test]
    fn popular_items_merge_and_rank() {
        let now = noon(2024, 5, 15);
        let orders = vec![
            order("1", OrderStatus::New, now, vec![LineItem::new("Naan", 2, 49.99), LineItem::new("Dal", 1, 199.99)]),
            order("2", OrderStatus::New, now, vec![LineItem::new("Naan", 1, 49.99), LineItem::new("Dal", 2, 199.99)]),
            order("3", OrderStatus::New, now, vec![LineItem::new("Rice", 1, 129.99)]),
        ];

        let ranked = popular_items(&orders, 2);
        assert_eq!(ranked.len(), 2);
        // Dal and Naan both sold 3; Dal earned more.
        assert_eq!(ranked[0].name, "Dal");
        assert_eq!(ranked[0].quantity_sold, 3);
        assert_eq!(ranked[1].name, "Naan");
        assert_eq!(ranked[1].revenue.to_string(), "149.97");
    }

    #[test]
    fn popular_items_saturate_quantity() {
        let now = noon(2024, 5, 15);
        let orders = vec![
            order("1", OrderStatus::New, now, vec![LineItem::new("Naan", u32::MAX, 49.99)]),
            order("2", OrderStatus::New, now, vec![LineItem::new("Naan", u32::MAX, 49.99)]),
        ];
        let ranked = popular_items(&orders, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].quantity_sold, u32::MAX);
    }
}
