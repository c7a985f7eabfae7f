//! Reports screen: sales figures for a time range and the best sellers.

use super::{chip, empty_state, footer, money, DEFAULT_CURRENCY};
use crate::domain::OrderRecord;
use crate::engine::{compute_report, filter_by_time_range, ReportStats, TimeRange};
use crate::ui::descriptors::{palette, Describe};
use crate::ui::viewmodel::{DisplayRow, HeaderInfo, ScreenViewModel, StatCard};
use chrono::{DateTime, Utc};

/// Number of dishes in the popular items list.
pub const POPULAR_ITEMS_LIMIT: usize = 5;

/// View model of the reports screen.
#[derive(Debug, Clone)]
pub struct ReportsScreen {
    orders: Vec<OrderRecord>,
    range: TimeRange,
    now: DateTime<Utc>,
    report: ReportStats,
    currency: String,
}

impl ReportsScreen {
    /// Enters the screen on the Today tab.
    #[must_use]
    pub fn new(orders: Vec<OrderRecord>, now: DateTime<Utc>) -> Self {
        let mut screen = Self {
            orders,
            range: TimeRange::default(),
            now,
            report: ReportStats::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        };
        screen.recompute();
        screen
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_string();
        self
    }

    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    #[must_use]
    pub const fn report(&self) -> &ReportStats {
        &self.report
    }

    pub fn set_range(&mut self, range: TimeRange) {
        self.range = range;
        self.recompute();
    }

    /// Selects a range by label; `false` leaves the selection unchanged.
    pub fn set_range_label(&mut self, label: &str) -> bool {
        match TimeRange::from_label(label) {
            Some(range) => {
                self.set_range(range);
                true
            }
            None => {
                tracing::warn!(label, "unknown report range");
                false
            }
        }
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("compute_report",
            total_orders = self.orders.len(),
            range = self.range.label()
        )
        .entered();

        let in_range = filter_by_time_range(&self.orders, self.range, self.now);
        self.report = compute_report(in_range, POPULAR_ITEMS_LIMIT);

        tracing::debug!(
            orders = self.report.total_orders,
            revenue_cents = self.report.revenue.cents(),
            "report computed"
        );
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let report = &self.report;

        let chips = TimeRange::ALL
            .iter()
            .map(|range| chip(range.descriptor(), *range == self.range))
            .collect();

        let count = |label: &str, value: usize, color: &str| StatCard {
            label: label.to_string(),
            value: value.to_string(),
            color: color.to_string(),
            caption: None,
        };
        let stats = vec![
            count("Total Orders", report.total_orders, palette::ORDERS),
            count("Completed", report.completed, palette::MODERN_GREEN),
            count("Pending", report.pending, palette::MODERN_ORANGE),
            StatCard {
                label: "Revenue".to_string(),
                value: money(&self.currency, report.revenue),
                color: palette::REPORTS.to_string(),
                caption: Some(format!(
                    "Avg {}",
                    money(&self.currency, report.average_order_value)
                )),
            },
        ];

        let rows: Vec<DisplayRow> = report
            .popular_items
            .iter()
            .enumerate()
            .map(|(rank, item)| DisplayRow {
                title: format!("{}. {}", rank + 1, item.name),
                subtitle: format!("{} sold", item.quantity_sold),
                trailing: money(&self.currency, item.revenue),
                badge: None,
                tags: Vec::new(),
                details: Vec::new(),
                is_muted: false,
            })
            .collect();

        let empty = rows.is_empty().then(|| {
            empty_state(
                "No sales in this period",
                &format!("Nothing was sold {}", self.range.label().to_lowercase()),
            )
        });

        ScreenViewModel {
            header: HeaderInfo {
                title: "Reports".to_string(),
                subtitle: format!("Sales overview: {}", self.range.label()),
                accent: palette::REPORTS.to_string(),
            },
            chips,
            search_bar: None,
            stats,
            banner: None,
            footer: footer(rows.len(), rows.len(), "popular items"),
            rows,
            empty_state: empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineItem, OrderStatus};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 15, 12, 0, 0).unwrap()
    }

    fn orders() -> Vec<OrderRecord> {
        let at = |t: DateTime<Utc>| t.timestamp_millis();
        vec![
            OrderRecord::new("1", 1, vec![LineItem::new("Naan", 4, 49.99)], OrderStatus::Delivered, at(now())),
            OrderRecord::new("2", 2, vec![LineItem::new("Biryani", 1, 349.99)], OrderStatus::Ready, at(now() - Duration::days(2))),
            OrderRecord::new("3", 3, vec![LineItem::new("Lassi", 2, 79.99)], OrderStatus::Delivered, at(now() - Duration::days(40))),
        ]
    }

    #[test]
    fn today_is_the_default_range() {
        let screen = ReportsScreen::new(orders(), now());
        assert_eq!(screen.range(), TimeRange::Today);
        assert_eq!(screen.report().total_orders, 1);

        let vm = screen.compute_viewmodel();
        assert_eq!(vm.selected_chip().unwrap().label, "Today");
        assert_eq!(vm.stat("Revenue").unwrap().value, "₹199.96");
        assert_eq!(vm.rows[0].title, "1. Naan");
    }

    #[test]
    fn widening_the_range_adds_orders() {
        let mut screen = ReportsScreen::new(orders(), now());
        assert!(screen.set_range_label("this week"));
        assert_eq!(screen.report().total_orders, 2);
        assert_eq!(screen.report().pending, 1);

        screen.set_range(TimeRange::ThisYear);
        assert_eq!(screen.report().total_orders, 3);
        assert_eq!(screen.report().completed, 2);
    }

    #[test]
    fn unknown_range_label_is_ignored() {
        let mut screen = ReportsScreen::new(orders(), now());
        assert!(!screen.set_range_label("fortnight"));
        assert_eq!(screen.range(), TimeRange::Today);
    }

    #[test]
    fn empty_period_shows_empty_state() {
        let vm = ReportsScreen::new(Vec::new(), now()).compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_state.as_ref().unwrap().subtitle, "Nothing was sold today");
        assert_eq!(vm.stat("Revenue").unwrap().caption.as_deref(), Some("Avg ₹0.00"));
    }
}
