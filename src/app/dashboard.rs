//! Dashboard screen: quick overview figures and one tile per module.
//!
//! Every figure is derived from the live collections; nothing on this screen
//! is stored. The search box narrows the tile list by module name.

use super::search::SearchInput;
use super::{empty_state, footer, money, Screen};
use crate::domain::{InventoryRecord, MenuRecord, Money, OrderRecord, StaffRecord, TableRecord};
use crate::engine::{
    compute_aggregates, compute_report, filter_by_time_range, percent, InventoryStats,
    LowStockAlert, MenuStats, OrderStats, StaffStats, TableStats, TimeRange,
};
use crate::ui::descriptors::palette;
use crate::ui::viewmodel::{AlertBanner, Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};
use chrono::{DateTime, Utc};

/// Headline numbers of the quick overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickStats {
    pub orders_today: usize,
    /// Revenue of today's orders, cancelled ones excluded.
    pub revenue_today: Money,
    pub tables_occupied: usize,
    pub tables_total: usize,
    /// `tables_occupied / tables_total` as a whole percentage.
    pub occupancy_percent: u32,
    pub staff_active: usize,
    pub staff_total: usize,
}

/// A navigation tile with its badge text ("5 New", "12/18", "8 Active").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleTile {
    pub screen: Screen,
    pub color: &'static str,
    pub badge: Option<String>,
}

/// View model of the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardScreen {
    inventory: Vec<InventoryRecord>,
    menu: Vec<MenuRecord>,
    orders: Vec<OrderRecord>,
    staff: Vec<StaffRecord>,
    tables: Vec<TableRecord>,
    now: DateTime<Utc>,
    search: SearchInput,
    currency: String,
}

impl DashboardScreen {
    #[must_use]
    pub fn new(
        inventory: Vec<InventoryRecord>,
        menu: Vec<MenuRecord>,
        orders: Vec<OrderRecord>,
        staff: Vec<StaffRecord>,
        tables: Vec<TableRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            inventory,
            menu,
            orders,
            staff,
            tables,
            now,
            search: SearchInput::default(),
            currency: super::DEFAULT_CURRENCY.to_string(),
        }
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: &str) -> Self {
        self.currency = symbol.to_string();
        self
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search.set(query);
    }

    pub fn push_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    #[must_use]
    pub fn quick_stats(&self) -> QuickStats {
        let _span = tracing::debug_span!("dashboard_quick_stats", orders = self.orders.len()).entered();

        let today = filter_by_time_range(&self.orders, TimeRange::Today, self.now);
        let report = compute_report(today.iter().copied(), 0);
        let tables: TableStats = compute_aggregates(&self.tables);
        let staff: StaffStats = compute_aggregates(&self.staff);

        QuickStats {
            orders_today: today.len(),
            revenue_today: report.revenue,
            tables_occupied: tables.occupied,
            tables_total: tables.total_tables,
            occupancy_percent: percent(tables.occupancy_ratio()),
            staff_active: staff.active_count,
            staff_total: staff.total_staff,
        }
    }

    /// One tile per module, in hub order.
    #[must_use]
    pub fn tiles(&self) -> Vec<ModuleTile> {
        let orders: OrderStats = compute_aggregates(&self.orders);
        let menu: MenuStats = compute_aggregates(&self.menu);
        let tables: TableStats = compute_aggregates(&self.tables);
        let inventory: InventoryStats = compute_aggregates(&self.inventory);
        let staff: StaffStats = compute_aggregates(&self.staff);

        vec![
            ModuleTile {
                screen: Screen::Orders,
                color: palette::MODERN_GREEN,
                badge: Some(format!("{} New", orders.new)),
            },
            ModuleTile {
                screen: Screen::Menu,
                color: palette::MODERN_ORANGE,
                badge: Some(format!("{} Items", menu.total_items)),
            },
            ModuleTile {
                screen: Screen::Tables,
                color: palette::MODERN_BLUE,
                badge: Some(format!("{}/{}", tables.occupied, tables.total_tables)),
            },
            ModuleTile {
                screen: Screen::Inventory,
                color: palette::MODERN_PURPLE,
                badge: (inventory.low_stock_count > 0).then(|| "Low Stock".to_string()),
            },
            ModuleTile {
                screen: Screen::Staff,
                color: palette::MODERN_CYAN,
                badge: Some(format!("{} Active", staff.active_count)),
            },
            ModuleTile {
                screen: Screen::Reports,
                color: palette::MODERN_BROWN,
                badge: None,
            },
        ]
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let quick = self.quick_stats();

        let stats = vec![
            StatCard {
                label: "Today's Orders".to_string(),
                value: quick.orders_today.to_string(),
                color: palette::MODERN_GREEN.to_string(),
                caption: None,
            },
            StatCard {
                label: "Revenue".to_string(),
                value: money(&self.currency, quick.revenue_today),
                color: palette::MODERN_BLUE.to_string(),
                caption: None,
            },
            StatCard {
                label: "Tables Occupied".to_string(),
                value: format!("{}/{}", quick.tables_occupied, quick.tables_total),
                color: palette::MODERN_ORANGE.to_string(),
                caption: Some(format!("{}%", quick.occupancy_percent)),
            },
            StatCard {
                label: "Staff Active".to_string(),
                value: quick.staff_active.to_string(),
                color: palette::MODERN_PURPLE.to_string(),
                caption: Some(if quick.staff_active == quick.staff_total {
                    "All".to_string()
                } else {
                    format!("of {}", quick.staff_total)
                }),
            },
        ];

        let query = self.search.query();
        let all_tiles = self.tiles();
        let total_tiles = all_tiles.len();
        let rows: Vec<DisplayRow> = all_tiles
            .into_iter()
            .filter(|tile| query.matches_text(tile.screen.title()))
            .map(|tile| DisplayRow {
                title: tile.screen.title().to_string(),
                subtitle: tile.screen.tagline().to_string(),
                trailing: String::new(),
                badge: tile.badge.map(|label| Badge {
                    label,
                    color: tile.color.to_string(),
                }),
                tags: Vec::new(),
                details: Vec::new(),
                is_muted: false,
            })
            .collect();

        let banner = LowStockAlert::from_records(&self.inventory).map(|alert| AlertBanner {
            title: alert.title,
            lines: alert.lines,
            overflow: alert.overflow,
            color: palette::SPICY_RED.to_string(),
        });

        let empty = rows
            .is_empty()
            .then(|| empty_state("No matching features", "Try searching for orders, menu or staff"));

        ScreenViewModel {
            header: HeaderInfo {
                title: "DishDashboard".to_string(),
                subtitle: self.now.format("%a, %b %d %H:%M").to_string(),
                accent: palette::MASALA_ORANGE.to_string(),
            },
            chips: Vec::new(),
            search_bar: Some(self.search.bar_info("Search dashboard features...")),
            stats,
            banner,
            footer: footer(rows.len(), total_tiles, "modules"),
            rows,
            empty_state: empty,
        }
    }
}
