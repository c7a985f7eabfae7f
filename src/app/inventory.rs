//! Inventory screen: category chips, search, stock summary and the low-stock banner.

use super::search::SearchInput;
use super::{chip, empty_state, footer, money, price, DEFAULT_CURRENCY};
use crate::domain::{InventoryRecord, INVENTORY_CATEGORIES};
use crate::engine::{compute_aggregates, CategoryFilter, LowStockAlert};
use crate::ui::descriptors::{inventory_category, palette};
use crate::ui::viewmodel::{AlertBanner, Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};

/// View model of the inventory screen.
///
/// Summary figures and the low-stock banner always cover the whole
/// collection; only the row list follows the selection.
#[derive(Debug, Clone)]
pub struct InventoryScreen {
    items: Vec<InventoryRecord>,
    category: CategoryFilter<String>,
    search: SearchInput,
    /// Indices into `items` passing the current selection, in order.
    visible: Vec<usize>,
    currency: String,
}

impl InventoryScreen {
    /// Enters the screen with the "All" chip selected and an empty search.
    #[must_use]
    pub fn new(items: Vec<InventoryRecord>) -> Self {
        let mut screen = Self {
            items,
            category: CategoryFilter::All,
            search: SearchInput::default(),
            visible: Vec::new(),
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
    pub fn items(&self) -> &[InventoryRecord] {
        &self.items
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter<String> {
        &self.category
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        self.search.text()
    }

    /// Records passing the category chip and the search box, in collection order.
    #[must_use]
    pub fn visible(&self) -> Vec<&InventoryRecord> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    /// Selects a chip by label. `"All"` clears the category filter; an
    /// unknown category selects nothing.
    pub fn set_category(&mut self, label: &str) {
        self.category = CategoryFilter::from_label(label);
        self.apply_filters();
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
        let _span = tracing::debug_span!("inventory_filter",
            total_items = self.items.len(),
            category = self.category.label(),
            query_len = self.search.text().len()
        )
        .entered();

        let query = self.search.query();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.category.matches(*item) && query.matches(*item))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(visible = self.visible.len(), "inventory filter applied");
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let stats = compute_aggregates(&self.items);
        let selected = self.category.label();

        let chips = INVENTORY_CATEGORIES
            .iter()
            .map(|name| chip(inventory_category(name), *name == selected))
            .collect();

        let stat_cards = vec![
            StatCard {
                label: "Total Items".to_string(),
                value: stats.total_items.to_string(),
                color: palette::INVENTORY.to_string(),
                caption: None,
            },
            StatCard {
                label: "Low Stock".to_string(),
                value: stats.low_stock_count.to_string(),
                color: palette::SPICY_RED.to_string(),
                caption: None,
            },
            StatCard {
                label: "Stock Value".to_string(),
                value: money(&self.currency, stats.stock_value),
                color: palette::CURRY_GREEN.to_string(),
                caption: None,
            },
        ];

        let banner = LowStockAlert::from_records(&self.items).map(|alert| AlertBanner {
            title: alert.title,
            lines: alert.lines,
            overflow: alert.overflow,
            color: palette::SPICY_RED.to_string(),
        });

        let rows: Vec<DisplayRow> = self
            .visible()
            .into_iter()
            .map(|item| self.display_row(item))
            .collect();

        let empty = rows.is_empty().then(|| {
            empty_state("No items found", "Try another category or search term")
        });

        ScreenViewModel {
            header: HeaderInfo {
                title: "Inventory".to_string(),
                subtitle: "Stock levels and reorder alerts".to_string(),
                accent: palette::INVENTORY.to_string(),
            },
            chips,
            search_bar: Some(self.search.bar_info("Search inventory...")),
            stats: stat_cards,
            banner,
            footer: footer(rows.len(), self.items.len(), "items"),
            rows,
            empty_state: empty,
        }
    }

    fn display_row(&self, item: &InventoryRecord) -> DisplayRow {
        let descriptor = inventory_category(&item.category);
        let badge = if item.is_low_stock() {
            Badge {
                label: "Low Stock".to_string(),
                color: palette::SPICY_RED.to_string(),
            }
        } else {
            Badge {
                label: item.category.clone(),
                color: descriptor.color.to_string(),
            }
        };

        DisplayRow {
            title: item.name.clone(),
            subtitle: item.category.clone(),
            trailing: format!("{} {}", item.quantity, item.unit),
            badge: Some(badge),
            tags: vec![
                format!("Min: {} {}", item.min_threshold, item.unit),
                format!("{}/{}", price(&self.currency, item.price), item.unit),
            ],
            details: Vec::new(),
            is_muted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn names(screen: &InventoryScreen) -> Vec<&str> {
        screen.visible().into_iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn spices_chip_shows_both_masalas() {
        let mut screen = InventoryScreen::new(fixtures::inventory());
        screen.set_category("Spices");
        assert_eq!(names(&screen), ["Tandoori Masala", "Garam Masala"]);

        let vm = screen.compute_viewmodel();
        assert_eq!(vm.selected_chip().unwrap().label, "Spices");
        assert_eq!(vm.stat("Total Items").unwrap().value, "10");
        assert_eq!(vm.stat("Low Stock").unwrap().value, "0");
        assert!(vm.banner.is_none());
    }

    #[test]
    fn category_and_search_combine() {
        let mut screen = InventoryScreen::new(fixtures::inventory());
        screen.set_category("Dairy");
        for c in "butt".chars() {
            screen.push_char(c);
        }
        assert_eq!(names(&screen), ["Butter"]);

        screen.pop_char();
        screen.pop_char();
        screen.pop_char();
        screen.pop_char();
        assert_eq!(names(&screen), ["Paneer", "Butter"]);
    }

    #[test]
    fn unknown_category_shows_empty_state() {
        let mut screen = InventoryScreen::new(fixtures::inventory());
        screen.set_category("Frozen");
        let vm = screen.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert!(vm.empty_state.is_some());
        assert!(vm.selected_chip().is_none());
    }

    #[test]
    fn banner_lists_three_and_counts_the_rest() {
        let items: Vec<_> = (1..=5)
            .map(|id| InventoryRecord::new(id, &format!("Spice {id}"), "Spices", 2, "kg", 5, 100.0))
            .collect();
        let vm = InventoryScreen::new(items).compute_viewmodel();
        let banner = vm.banner.unwrap();
        assert_eq!(banner.lines, ["Spice 1: 2/5 kg", "Spice 2: 2/5 kg", "Spice 3: 2/5 kg"]);
        assert_eq!(banner.overflow.as_deref(), Some("And 2 more items"));
        assert_eq!(vm.rows[0].badge.as_ref().unwrap().label, "Low Stock");
    }

    #[test]
    fn stock_value_uses_currency() {
        let items = vec![InventoryRecord::new(1, "Saffron", "Spices", 2, "g", 1, 1250.5)];
        let vm = InventoryScreen::new(items).with_currency("$").compute_viewmodel();
        assert_eq!(vm.stat("Stock Value").unwrap().value, "$2,501.00");
        assert_eq!(vm.rows[0].tags[1], "$1,250.50/g");
    }
}
