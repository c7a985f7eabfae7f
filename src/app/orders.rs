//! Orders screen: status tabs, search, order cards and the revenue of what is shown.

use super::search::SearchInput;
use super::{empty_state, footer, money, status_chips, DEFAULT_CURRENCY};
use crate::domain::{OrderRecord, OrderStatus};
use crate::engine::{compute_aggregates, revenue, ORDER_TABS};
use crate::ui::descriptors::{palette, Describe};
use crate::ui::viewmodel::{Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};

/// Tab the orders screen opens on: New.
pub const DEFAULT_ORDER_TAB: usize = 1;

/// View model of the orders screen.
#[derive(Debug, Clone)]
pub struct OrdersScreen {
    orders: Vec<OrderRecord>,
    tab: usize,
    search: SearchInput,
    visible: Vec<usize>,
    now_millis: i64,
    currency: String,
}

impl OrdersScreen {
    /// Enters the screen on the New tab. `now_millis` anchors the "15m ago" labels.
    #[must_use]
    pub fn new(orders: Vec<OrderRecord>, now_millis: i64) -> Self {
        let mut screen = Self {
            orders,
            tab: DEFAULT_ORDER_TAB,
            search: SearchInput::default(),
            visible: Vec::new(),
            now_millis,
            currency: DEFAULT_CURRENCY.to_string(),
        };
        screen.apply_filters();
        screen
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_string();
        self
    }

    #[must_use]
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }

    /// Selected tab index, already resolved into the tab table.
    #[must_use]
    pub const fn tab(&self) -> usize {
        self.tab
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&OrderRecord> {
        self.visible.iter().map(|&i| &self.orders[i]).collect()
    }

    /// Selects a tab; indexes past the last tab select "All Orders".
    pub fn select_tab(&mut self, index: usize) {
        self.tab = ORDER_TABS.resolve(index);
        self.apply_filters();
    }

    pub fn select_status(&mut self, status: OrderStatus) {
        self.select_tab(ORDER_TABS.index_of(status).unwrap_or(0));
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search.set(query);
        self.apply_filters();
    }

    pub fn push_char(&mut self, c: char) {
        self.search.push(c);
        self.apply_filters();
    }

    pub fn pop_char(&mut self) {
        if self.search.pop() {
            self.apply_filters();
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.apply_filters();
    }

    fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("orders_filter",
            total_orders = self.orders.len(),
            tab = ORDER_TABS.label(self.tab),
            query_len = self.search.text().len()
        )
        .entered();

        let query = self.search.query();
        let tab = self.tab;
        self.visible = self
            .orders
            .iter()
            .enumerate()
            .filter(|(_, order)| ORDER_TABS.matches(tab, *order) && query.matches(*order))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(visible = self.visible.len(), "orders filter applied");
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let stats = compute_aggregates(&self.orders);
        let visible = self.visible();

        let stat_cards = vec![
            StatCard {
                label: "Total Orders".to_string(),
                value: stats.total_orders.to_string(),
                color: palette::ORDERS.to_string(),
                caption: None,
            },
            StatCard {
                label: "Pending".to_string(),
                value: stats.pending().to_string(),
                color: palette::MODERN_ORANGE.to_string(),
                caption: Some(format!("{} New", stats.new)),
            },
            StatCard {
                label: "Revenue".to_string(),
                value: money(&self.currency, revenue(visible.iter().copied())),
                color: palette::MODERN_GREEN.to_string(),
                caption: Some(ORDER_TABS.label(self.tab).to_string()),
            },
        ];

        let rows: Vec<DisplayRow> = visible.iter().map(|order| self.display_row(order)).collect();

        let empty = rows.is_empty().then(|| {
            empty_state(
                &format!("No {} orders", ORDER_TABS.label(self.tab).to_lowercase()),
                "Orders appear here as tables place them",
            )
        });

        ScreenViewModel {
            header: HeaderInfo {
                title: "Orders".to_string(),
                subtitle: "Kitchen queue by status".to_string(),
                accent: palette::ORDERS.to_string(),
            },
            chips: status_chips(&ORDER_TABS, self.tab, palette::ORDERS),
            search_bar: Some(self.search.bar_info("Search by dish, note or table...")),
            stats: stat_cards,
            banner: None,
            footer: footer(rows.len(), self.orders.len(), "orders"),
            rows,
            empty_state: empty,
        }
    }

    fn display_row(&self, order: &OrderRecord) -> DisplayRow {
        let descriptor = order.status.descriptor();

        let mut details: Vec<String> = order
            .line_items
            .iter()
            .map(|item| {
                format!(
                    "{}x {}  {}",
                    item.quantity,
                    item.name,
                    money(&self.currency, item.line_total())
                )
            })
            .collect();
        if let Some(note) = &order.special_instructions {
            details.push(format!("Note: {note}"));
        }

        DisplayRow {
            title: format!("Order #{}", order.id),
            subtitle: format!("Table {} | {} items", order.table_number, order.item_count()),
            trailing: money(&self.currency, order.total()),
            badge: Some(Badge {
                label: descriptor.label.to_string(),
                color: descriptor.color.to_string(),
            }),
            tags: vec![order.time_ago(self.now_millis)],
            details,
            is_muted: order.status == OrderStatus::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const NOW: i64 = 1_700_000_000_000;

    fn screen() -> OrdersScreen {
        OrdersScreen::new(fixtures::orders_at(NOW), NOW)
    }

    #[test]
    fn opens_on_new_tab() {
        let vm = screen().compute_viewmodel();
        assert_eq!(vm.selected_chip().unwrap().label, "New");
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].title, "Order #1");
        assert_eq!(vm.rows[0].trailing, "₹799.94");
        assert_eq!(vm.rows[0].tags, ["just now"]);
        assert_eq!(vm.stat("Revenue").unwrap().value, "₹799.94");
    }

    #[test]
    fn all_tab_revenue_and_time_ago() {
        let mut screen = screen();
        screen.select_tab(0);
        let vm = screen.compute_viewmodel();
        assert_eq!(vm.rows.len(), 3);
        assert_eq!(vm.rows[1].tags, ["15m ago"]);
        assert_eq!(vm.rows[1].details.last().unwrap(), "Note: Less spicy, no onions");
        assert_eq!(vm.stat("Revenue").unwrap().value, "₹2,019.87");
        assert_eq!(vm.stat("Pending").unwrap().value, "3");
    }

    #[test]
    fn out_of_range_tab_means_all() {
        let mut screen = screen();
        screen.select_tab(42);
        assert_eq!(screen.tab(), 0);
        assert_eq!(screen.visible().len(), 3);
    }

    #[test]
    fn search_by_table_and_status() {
        let mut screen = screen();
        screen.select_status(OrderStatus::Ready);
        screen.set_search_query("table 7");
        assert_eq!(screen.visible().len(), 1);

        screen.set_search_query("naan");
        let vm = screen.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No ready orders");
    }
}
