//! Display descriptors for every status and category value.
//!
//! Each enum variant maps to exactly one [`DisplayDescriptor`] (color, icon,
//! label), shared by every screen that shows it. Colors are `#RRGGBB` hex
//! strings; icons are Material Symbols names for front ends that have an icon
//! font, and are ignored by the terminal renderer.
//!
//! # Example
//!
//! ```
//! use dishboard::domain::OrderStatus;
//! use dishboard::ui::descriptors::Describe;
//!
//! let preparing = OrderStatus::Preparing.descriptor();
//! assert_eq!(preparing.color, "#FF9800");
//! assert_eq!(preparing.label, "Preparing");
//! ```

use crate::domain::{MenuCategory, OrderStatus, StaffStatus, TableStatus};
use crate::engine::{TimeRange, ALL_SENTINEL};
use serde::Serialize;

/// Palette shared by status badges and module tiles.
pub mod palette {
    pub const MODERN_BLUE: &str = "#2196F3";
    pub const MODERN_ORANGE: &str = "#FF9800";
    pub const MODERN_GREEN: &str = "#4CAF50";
    pub const MODERN_PURPLE: &str = "#9C27B0";
    pub const MODERN_RED: &str = "#E91E63";
    pub const MODERN_CYAN: &str = "#00BCD4";
    pub const MODERN_BROWN: &str = "#795548";

    pub const TURMERIC_YELLOW: &str = "#FFD700";
    pub const CURRY_GREEN: &str = "#7CB342";
    pub const SPICY_RED: &str = "#E41E31";
    pub const MASALA_ORANGE: &str = "#FF9933";
    pub const DAIRY_BLUE: &str = "#2196F3";

    pub const ORDERS: &str = "#E74C3C";
    pub const MENU: &str = "#FF9F1C";
    pub const TABLES: &str = "#3498DB";
    pub const STAFF: &str = "#9B59B6";
    pub const REPORTS: &str = "#2ECC71";
    pub const INVENTORY: &str = "#D35400";

    /// Used for categories no descriptor knows about.
    pub const NEUTRAL: &str = "#9E9E9E";
}

/// How one status or category value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayDescriptor {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

impl DisplayDescriptor {
    const fn new(color: &'static str, icon: &'static str, label: &'static str) -> Self {
        Self { color, icon, label }
    }
}

/// Values that have a fixed presentation.
pub trait Describe {
    fn descriptor(&self) -> DisplayDescriptor;
}

impl Describe for OrderStatus {
    fn descriptor(&self) -> DisplayDescriptor {
        use palette::{MODERN_BLUE, MODERN_GREEN, MODERN_ORANGE, MODERN_PURPLE, MODERN_RED};
        match self {
            Self::New => DisplayDescriptor::new(MODERN_BLUE, "fiber_new", self.label()),
            Self::Preparing => DisplayDescriptor::new(MODERN_ORANGE, "restaurant", self.label()),
            Self::Ready => DisplayDescriptor::new(MODERN_GREEN, "done_all", self.label()),
            Self::Delivered => DisplayDescriptor::new(MODERN_PURPLE, "delivery_dining", self.label()),
            Self::Cancelled => DisplayDescriptor::new(MODERN_RED, "cancel", self.label()),
        }
    }
}

impl Describe for StaffStatus {
    fn descriptor(&self) -> DisplayDescriptor {
        match self {
            Self::Active => DisplayDescriptor::new(palette::MODERN_GREEN, "check_circle", self.label()),
            Self::OffDuty => DisplayDescriptor::new(palette::MODERN_ORANGE, "schedule", self.label()),
            Self::OnLeave => DisplayDescriptor::new(palette::MODERN_RED, "event_busy", self.label()),
        }
    }
}

impl Describe for TableStatus {
    fn descriptor(&self) -> DisplayDescriptor {
        match self {
            Self::Available => DisplayDescriptor::new(palette::MODERN_GREEN, "check_circle", self.label()),
            Self::Occupied => DisplayDescriptor::new(palette::MODERN_RED, "person", self.label()),
            Self::Reserved => DisplayDescriptor::new(palette::MODERN_ORANGE, "schedule", self.label()),
            Self::Cleaning => DisplayDescriptor::new(palette::MODERN_BLUE, "cleaning_services", self.label()),
        }
    }
}

impl Describe for MenuCategory {
    fn descriptor(&self) -> DisplayDescriptor {
        match self {
            Self::Starters => DisplayDescriptor::new("#FF9F1C", "restaurant_menu", self.label()),
            Self::MainCourse => DisplayDescriptor::new("#E74C3C", "dinner_dining", self.label()),
            Self::Desserts => DisplayDescriptor::new("#E84393", "cake", self.label()),
            Self::Beverages => DisplayDescriptor::new("#3498DB", "local_bar", self.label()),
            Self::Specials => DisplayDescriptor::new("#2ECC71", "star", self.label()),
        }
    }
}

impl Describe for TimeRange {
    fn descriptor(&self) -> DisplayDescriptor {
        DisplayDescriptor::new(palette::REPORTS, "date_range", self.label())
    }
}

const INVENTORY_DESCRIPTORS: [DisplayDescriptor; 7] = [
    DisplayDescriptor::new(palette::TURMERIC_YELLOW, "apps", ALL_SENTINEL),
    DisplayDescriptor::new(palette::CURRY_GREEN, "grass", "Grains"),
    DisplayDescriptor::new(palette::SPICY_RED, "whatshot", "Spices"),
    DisplayDescriptor::new(palette::DAIRY_BLUE, "local_drink", "Dairy"),
    DisplayDescriptor::new(palette::CURRY_GREEN, "eco", "Vegetables"),
    DisplayDescriptor::new(palette::SPICY_RED, "restaurant", "Meat"),
    DisplayDescriptor::new(palette::MASALA_ORANGE, "water_drop", "Oil"),
];

/// Descriptor of an inventory category chip.
///
/// Inventory categories are free-form strings, so unknown names get a neutral
/// descriptor with a generic label.
#[must_use]
pub fn inventory_category(name: &str) -> DisplayDescriptor {
    INVENTORY_DESCRIPTORS
        .iter()
        .find(|d| d.label == name)
        .copied()
        .unwrap_or(DisplayDescriptor::new(palette::NEUTRAL, "category", "Other"))
}

/// Descriptor of the "All" chip on the menu screen.
#[must_use]
pub const fn all_menu_categories() -> DisplayDescriptor {
    DisplayDescriptor::new(palette::MENU, "apps", ALL_SENTINEL)
}

/// Descriptor of an "all" status tab, colored after the screen it belongs to.
#[must_use]
pub const fn all_tab(label: &'static str, color: &'static str) -> DisplayDescriptor {
    DisplayDescriptor::new(color, "view_module", label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::INVENTORY_CATEGORIES;

    #[test]
    fn every_inventory_category_has_its_own_descriptor() {
        for name in INVENTORY_CATEGORIES {
            assert_eq!(inventory_category(name).label, name);
        }
        assert_eq!(inventory_category("Frozen").color, palette::NEUTRAL);
    }

    #[test]
    fn order_status_colors() {
        let colors: Vec<_> = OrderStatus::ALL.iter().map(|s| s.descriptor().color).collect();
        assert_eq!(colors, ["#2196F3", "#FF9800", "#4CAF50", "#9C27B0", "#E91E63"]);
    }

    #[test]
    fn labels_follow_enum_labels() {
        for status in StaffStatus::ALL {
            assert_eq!(status.descriptor().label, status.label());
        }
        for status in TableStatus::ALL {
            assert_eq!(status.descriptor().label, status.label());
        }
        for category in MenuCategory::ALL {
            assert_eq!(category.descriptor().label, category.label());
        }
    }
}
