//! Application layer: one view-model object per dashboard screen.
//!
//! Each screen owns the collections it was entered with plus its selection
//! (category chip, status tab, search text) as plain fields. Setters re-apply
//! the engine filters immediately, so `visible()` is always consistent with
//! the selection, and `compute_viewmodel()` turns the current state into a
//! display-ready [`ScreenViewModel`](crate::ui::viewmodel::ScreenViewModel).
//!
//! ```text
//! FixtureSource → Screen::new → setters → apply_filters → compute_viewmodel → renderer
//! ```
//!
//! Selections are never persisted: entering a screen again starts from its
//! defaults.
//!
//! # Example
//!
//! ```
//! use dishboard::app::InventoryScreen;
//! use dishboard::fixtures;
//!
//! let mut screen = InventoryScreen::new(fixtures::inventory());
//! screen.set_category("Spices");
//! assert_eq!(screen.visible().len(), 2);
//!
//! let vm = screen.compute_viewmodel();
//! assert_eq!(vm.stat("Low Stock").unwrap().value, "0");
//! ```

pub mod dashboard;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod screen;
pub mod search;
pub mod staff;
pub mod tables;

pub use dashboard::{DashboardScreen, ModuleTile, QuickStats};
pub use inventory::InventoryScreen;
pub use menu::{MenuScreen, DEFAULT_MENU_CATEGORY};
pub use orders::{OrdersScreen, DEFAULT_ORDER_TAB};
pub use reports::{ReportsScreen, POPULAR_ITEMS_LIMIT};
pub use screen::{ActiveScreen, Screen, Selection};
pub use search::SearchInput;
pub use staff::StaffScreen;
pub use tables::TablesScreen;

use crate::domain::Money;
use crate::engine::StatusTabs;
use crate::ui::descriptors::{all_tab, Describe, DisplayDescriptor};
use crate::ui::viewmodel::{ChipInfo, EmptyState, FooterInfo};

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY: &str = "₹";

/// `₹1,234.50`
pub(crate) fn money(currency: &str, amount: Money) -> String {
    format!("{currency}{}", amount.grouped())
}

/// A record's unit price, rounded to the cent.
pub(crate) fn price(currency: &str, amount: f64) -> String {
    money(currency, Money::from_amount(amount))
}

pub(crate) fn chip(descriptor: DisplayDescriptor, is_selected: bool) -> ChipInfo {
    ChipInfo {
        label: descriptor.label.to_string(),
        color: descriptor.color.to_string(),
        icon: descriptor.icon.to_string(),
        is_selected,
    }
}

/// Chips for a status tab row; the "all" tab takes the screen's accent color.
pub(crate) fn status_chips<S>(tabs: &StatusTabs<S>, selected: usize, all_color: &'static str) -> Vec<ChipInfo>
where
    S: Copy + Eq + Describe,
{
    tabs.tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let descriptor = tab
                .status
                .map_or_else(|| all_tab(tab.label, all_color), |status| status.descriptor());
            ChipInfo {
                label: tab.label.to_string(),
                ..chip(descriptor, index == selected)
            }
        })
        .collect()
}

pub(crate) fn empty_state(message: &str, subtitle: &str) -> EmptyState {
    EmptyState {
        message: message.to_string(),
        subtitle: subtitle.to_string(),
    }
}

pub(crate) fn footer(visible: usize, total: usize, noun: &str) -> FooterInfo {
    FooterInfo {
        text: format!("Showing {visible} of {total} {noun}"),
    }
}
