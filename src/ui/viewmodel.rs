//! View model types representing renderable screen state.
//!
//! View models are immutable snapshots computed by each screen's
//! `compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready strings, colors and flags.
//!
//! # Layout
//!
//! ```text
//! HeaderInfo        title, subtitle, accent color
//! ChipInfo*         category chips or status tabs
//! SearchBarInfo?    current query
//! StatCard*         summary figures
//! AlertBanner?      low-stock warning
//! DisplayRow*       one per visible record
//! EmptyState?       shown instead of rows when nothing is visible
//! FooterInfo        visible/total counts
//! ```

use serde::Serialize;

/// Complete view model of one screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenViewModel {
    pub header: HeaderInfo,

    /// Selectable chips or tabs, in display order. Exactly one is selected
    /// when the list is not empty.
    pub chips: Vec<ChipInfo>,

    /// Search box, `None` on screens without search.
    pub search_bar: Option<SearchBarInfo>,

    pub stats: Vec<StatCard>,

    pub banner: Option<AlertBanner>,

    /// One row per visible record, in collection order.
    pub rows: Vec<DisplayRow>,

    /// Set exactly when `rows` is empty.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

impl ScreenViewModel {
    /// The selected chip, if the screen has any.
    #[must_use]
    pub fn selected_chip(&self) -> Option<&ChipInfo> {
        self.chips.iter().find(|chip| chip.is_selected)
    }

    /// Looks up a stat card by its label.
    #[must_use]
    pub fn stat(&self, label: &str) -> Option<&StatCard> {
        self.stats.iter().find(|card| card.label == label)
    }
}

/// Screen title bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
    /// Hex color of the screen's module tile.
    pub accent: String,
}

/// One category chip or status tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipInfo {
    pub label: String,
    pub color: String,
    pub icon: String,
    pub is_selected: bool,
}

/// A headline figure such as "Total Items 10".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub color: String,
    /// Optional secondary line ("67%", "5 New").
    pub caption: Option<String>,
}

/// Warning card shown above the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBanner {
    pub title: String,
    pub lines: Vec<String>,
    pub overflow: Option<String>,
    pub color: String,
}

/// A colored status pill on a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub color: String,
}

/// Display information for a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub title: String,
    pub subtitle: String,
    /// Right-aligned figure: price, total, seats.
    pub trailing: String,
    pub badge: Option<Badge>,
    /// Short markers such as "Veg" or "15m ago".
    pub tags: Vec<String>,
    /// Extra lines under the row (line items, instructions).
    pub details: Vec<String>,
    /// Rendered dimmed, e.g. unavailable dishes.
    pub is_muted: bool,
}

/// Message shown when a screen has nothing to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search input box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: String,
}

/// Bottom line of the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterInfo {
    pub text: String,
}
