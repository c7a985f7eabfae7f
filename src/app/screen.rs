//! Screen identifiers and the currently entered screen.

use super::{
    DashboardScreen, InventoryScreen, MenuScreen, OrdersScreen, ReportsScreen, StaffScreen,
    TablesScreen,
};
use crate::fixtures::FixtureSource;
use crate::ui::viewmodel::ScreenViewModel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Every screen reachable from the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Screen {
    #[default]
    Dashboard,
    Orders,
    Menu,
    Tables,
    Inventory,
    Staff,
    Reports,
}

impl Screen {
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::Orders,
        Self::Menu,
        Self::Tables,
        Self::Inventory,
        Self::Staff,
        Self::Reports,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Orders",
            Self::Menu => "Menu",
            Self::Tables => "Tables",
            Self::Inventory => "Inventory",
            Self::Staff => "Staff",
            Self::Reports => "Reports",
        }
    }

    /// One-line description shown on the module tile.
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Dashboard => "Today at a glance",
            Self::Orders => "Track the kitchen queue",
            Self::Menu => "Dishes, prices and tags",
            Self::Tables => "Seating and reservations",
            Self::Inventory => "Stock levels and alerts",
            Self::Staff => "Team and shifts",
            Self::Reports => "Sales and best sellers",
        }
    }

    /// Parses a screen name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|screen| screen.title().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Selection to apply right after entering a screen.
///
/// Fields a screen has no use for are ignored (a tab on the menu screen, a
/// category on the staff screen).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<String>,
    pub tab: Option<usize>,
    pub query: Option<String>,
    pub range: Option<String>,
}

/// The screen being shown, holding its own collections and selection.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    Dashboard(DashboardScreen),
    Orders(OrdersScreen),
    Menu(MenuScreen),
    Tables(TablesScreen),
    Inventory(InventoryScreen),
    Staff(StaffScreen),
    Reports(ReportsScreen),
}

impl ActiveScreen {
    /// Enters `screen` with fresh collections from `source` and default selections.
    pub fn enter(screen: Screen, source: &dyn FixtureSource, now: DateTime<Utc>, currency: &str) -> Self {
        let _span = tracing::debug_span!("enter_screen", screen = screen.title()).entered();
        let now_millis = now.timestamp_millis();

        match screen {
            Screen::Dashboard => Self::Dashboard(
                DashboardScreen::new(
                    source.inventory(),
                    source.menu(),
                    source.orders(now_millis),
                    source.staff(),
                    source.tables(),
                    now,
                )
                .with_currency(currency),
            ),
            Screen::Orders => Self::Orders(
                OrdersScreen::new(source.orders(now_millis), now_millis).with_currency(currency),
            ),
            Screen::Menu => Self::Menu(MenuScreen::new(source.menu()).with_currency(currency)),
            Screen::Tables => Self::Tables(TablesScreen::new(source.tables())),
            Screen::Inventory => {
                Self::Inventory(InventoryScreen::new(source.inventory()).with_currency(currency))
            }
            Screen::Staff => Self::Staff(StaffScreen::new(source.staff())),
            Screen::Reports => Self::Reports(
                ReportsScreen::new(source.orders(now_millis), now).with_currency(currency),
            ),
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Dashboard(_) => Screen::Dashboard,
            Self::Orders(_) => Screen::Orders,
            Self::Menu(_) => Screen::Menu,
            Self::Tables(_) => Screen::Tables,
            Self::Inventory(_) => Screen::Inventory,
            Self::Staff(_) => Screen::Staff,
            Self::Reports(_) => Screen::Reports,
        }
    }

    /// Applies the parts of `selection` this screen understands.
    pub fn apply(&mut self, selection: &Selection) {
        tracing::debug!(screen = self.screen().title(), ?selection, "applying selection");

        match self {
            Self::Inventory(screen) => {
                if let Some(category) = &selection.category {
                    screen.set_category(category);
                }
            }
            Self::Menu(screen) => {
                if let Some(category) = &selection.category {
                    screen.set_category(category);
                }
            }
            Self::Orders(screen) => {
                if let Some(tab) = selection.tab {
                    screen.select_tab(tab);
                }
            }
            Self::Staff(screen) => {
                if let Some(tab) = selection.tab {
                    screen.select_tab(tab);
                }
            }
            Self::Tables(screen) => {
                if let Some(tab) = selection.tab {
                    screen.select_tab(tab);
                }
            }
            Self::Reports(screen) => {
                if let Some(range) = &selection.range {
                    screen.set_range_label(range);
                }
            }
            Self::Dashboard(_) => {}
        }

        if let Some(query) = &selection.query {
            self.set_search_query(query);
        }
    }

    /// Forwards to the screen's search box; the reports screen has none.
    pub fn set_search_query(&mut self, query: &str) {
        match self {
            Self::Dashboard(screen) => screen.set_search_query(query),
            Self::Orders(screen) => screen.set_search_query(query),
            Self::Menu(screen) => screen.set_search_query(query),
            Self::Tables(screen) => screen.set_search_query(query),
            Self::Inventory(screen) => screen.set_search_query(query),
            Self::Staff(screen) => screen.set_search_query(query),
            Self::Reports(_) => {}
        }
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        match self {
            Self::Dashboard(screen) => screen.compute_viewmodel(),
            Self::Orders(screen) => screen.compute_viewmodel(),
            Self::Menu(screen) => screen.compute_viewmodel(),
            Self::Tables(screen) => screen.compute_viewmodel(),
            Self::Inventory(screen) => screen.compute_viewmodel(),
            Self::Staff(screen) => screen.compute_viewmodel(),
            Self::Reports(screen) => screen.compute_viewmodel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Builtin;

    #[test]
    fn screen_names_parse_loosely() {
        assert_eq!(Screen::from_name(" inventory "), Some(Screen::Inventory));
        assert_eq!(Screen::from_name("REPORTS"), Some(Screen::Reports));
        assert_eq!(Screen::from_name("settings"), None);
    }

    #[test]
    fn reentering_resets_selection() {
        let now = Utc::now();
        let mut screen = ActiveScreen::enter(Screen::Staff, &Builtin, now, "₹");
        screen.apply(&Selection {
            tab: Some(1),
            query: Some("chef".to_string()),
            ..Selection::default()
        });
        assert_eq!(screen.compute_viewmodel().rows.len(), 1);

        let fresh = ActiveScreen::enter(Screen::Staff, &Builtin, now, "₹");
        let vm = fresh.compute_viewmodel();
        assert_eq!(vm.rows.len(), 5);
        assert_eq!(vm.search_bar.unwrap().query, "");
    }

    #[test]
    fn selection_fields_a_screen_lacks_are_ignored() {
        let mut screen = ActiveScreen::enter(Screen::Menu, &Builtin, Utc::now(), "₹");
        screen.apply(&Selection {
            category: Some("Desserts".to_string()),
            tab: Some(3),
            ..Selection::default()
        });
        let vm = screen.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].title, "Gulab Jamun");
    }
}
