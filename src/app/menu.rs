//! Menu screen.

use super::search::SearchInput;
use super::{chip, empty_state, footer, price, DEFAULT_CURRENCY};
use crate::domain::{MenuCategory, MenuRecord};
use crate::engine::{compute_aggregates, CategoryFilter};
use crate::ui::descriptors::{all_menu_categories, palette, Describe};
use crate::ui::viewmodel::{Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};

/// Category the menu screen opens on.
pub const DEFAULT_MENU_CATEGORY: MenuCategory = MenuCategory::Starters;

/// View model of the menu screen.
#[derive(Debug, Clone)]
pub struct MenuScreen {
    dishes: Vec<MenuRecord>,
    category: CategoryFilter<MenuCategory>,
    search: SearchInput,
    visible: Vec<usize>,
    currency: String,
}

impl MenuScreen {
    /// Enters the screen on the Starters chip.
    #[must_use]
    pub fn new(dishes: Vec<MenuRecord>) -> Self {
        let mut screen = Self {
            dishes,
            category: CategoryFilter::Only(DEFAULT_MENU_CATEGORY),
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
    pub fn dishes(&self) -> &[MenuRecord] {
        &self.dishes
    }

    #[must_use]
    pub const fn category(&self) -> &CategoryFilter<MenuCategory> {
        &self.category
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&MenuRecord> {
        self.visible.iter().map(|&i| &self.dishes[i]).collect()
    }

    pub fn select_category(&mut self, category: CategoryFilter<MenuCategory>) {
        self.category = category;
        self.apply_filters();
    }

    /// Selects a chip by label (`"All"` or a category name, any case).
    ///
    /// Returns `false` and keeps the current selection when the label names
    /// no menu category.
    pub fn set_category(&mut self, label: &str) -> bool {
        match CategoryFilter::from_menu_label(label) {
            Some(category) => {
                self.select_category(category);
                true
            }
            None => {
                tracing::warn!(label, "unknown menu category");
                false
            }
        }
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
        let _span = tracing::debug_span!("menu_filter",
            total_dishes = self.dishes.len(),
            category = self.category.label(),
            query_len = self.search.text().len()
        )
        .entered();

        let query = self.search.query();
        self.visible = self
            .dishes
            .iter()
            .enumerate()
            .filter(|(_, dish)| self.category.matches(*dish) && query.matches(*dish))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(visible = self.visible.len(), "menu filter applied");
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let stats = compute_aggregates(&self.dishes);

        let mut chips = vec![chip(all_menu_categories(), self.category.is_all())];
        chips.extend(MenuCategory::ALL.iter().map(|category| {
            chip(
                category.descriptor(),
                self.category == CategoryFilter::Only(*category),
            )
        }));

        let card = |label: &str, value: usize, color: &str| StatCard {
            label: label.to_string(),
            value: value.to_string(),
            color: color.to_string(),
            caption: None,
        };
        let stat_cards = vec![
            card("Dishes", stats.total_items, palette::MENU),
            card("Available", stats.available_count, palette::MODERN_GREEN),
            card("Vegetarian", stats.vegetarian_count, palette::CURRY_GREEN),
            card("Spicy", stats.spicy_count, palette::SPICY_RED),
        ];

        let rows: Vec<DisplayRow> = self
            .visible()
            .into_iter()
            .map(|dish| {
                let descriptor = dish.category.descriptor();
                DisplayRow {
                    title: dish.name.clone(),
                    subtitle: dish.description.clone(),
                    trailing: price(&self.currency, dish.price),
                    badge: Some(Badge {
                        label: descriptor.label.to_string(),
                        color: descriptor.color.to_string(),
                    }),
                    tags: dish.tags(),
                    details: Vec::new(),
                    is_muted: !dish.is_available,
                }
            })
            .collect();

        let empty = rows
            .is_empty()
            .then(|| empty_state("No dishes found", "Try another category or search term"));

        ScreenViewModel {
            header: HeaderInfo {
                title: "Menu".to_string(),
                subtitle: "Dishes by category".to_string(),
                accent: palette::MENU.to_string(),
            },
            chips,
            search_bar: Some(self.search.bar_info("Search dishes...")),
            stats: stat_cards,
            banner: None,
            footer: footer(rows.len(), self.dishes.len(), "dishes"),
            rows,
            empty_state: empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn opens_on_starters() {
        let screen = MenuScreen::new(fixtures::menu());
        let visible: Vec<_> = screen.visible().into_iter().map(|d| d.name.as_str()).collect();
        assert_eq!(visible, ["Paneer Tikka"]);

        let vm = screen.compute_viewmodel();
        assert_eq!(vm.chips.len(), 6);
        assert_eq!(vm.selected_chip().unwrap().label, "Starters");
        assert_eq!(vm.rows[0].trailing, "₹299.00");
        assert_eq!(vm.rows[0].tags, ["Veg", "Spicy", "15 min"]);
    }

    #[test]
    fn all_chip_and_search_across_descriptions() {
        let mut screen = MenuScreen::new(fixtures::menu());
        assert!(screen.set_category("all"));
        assert_eq!(screen.visible().len(), 5);

        screen.set_search_query("CURRY");
        let visible: Vec<_> = screen.visible().into_iter().map(|d| d.name.as_str()).collect();
        assert_eq!(visible, ["Butter Chicken"]);
    }

    #[test]
    fn unknown_label_keeps_selection() {
        let mut screen = MenuScreen::new(fixtures::menu());
        assert!(!screen.set_category("Soups"));
        assert_eq!(screen.category(), &CategoryFilter::Only(MenuCategory::Starters));
    }

    #[test]
    fn unavailable_dish_is_muted() {
        let dishes = vec![MenuRecord::new("9", "Kulfi", "Frozen dessert", 120.0, MenuCategory::Desserts).unavailable()];
        let mut screen = MenuScreen::new(dishes);
        screen.set_category("Desserts");
        let vm = screen.compute_viewmodel();
        assert!(vm.rows[0].is_muted);
        assert_eq!(vm.stat("Available").unwrap().value, "0");
    }

    #[test]
    fn empty_category_shows_empty_state() {
        let mut screen = MenuScreen::new(fixtures::menu());
        screen.set_search_query("pizza");
        let vm = screen.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "No dishes found");
    }
}
