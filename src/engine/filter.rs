//! Selection filters: category chips, status tabs and free-text search.
//!
//! Every filter takes any iterator of record references and returns the
//! matching references in input order, so filters chain without cloning:
//!
//! ```
//! use dishboard::engine::{filter_by_category, filter_by_search_query, CategoryFilter};
//! use dishboard::fixtures;
//!
//! let items = fixtures::inventory();
//! let spices = filter_by_category(&items, &CategoryFilter::from_label("Spices"));
//! let masalas = filter_by_search_query(spices, "masala", |item| [item.name.as_str()]);
//! assert_eq!(masalas.len(), 2);
//! ```
//!
//! None of these functions fail. An unknown category yields an empty view, an
//! out-of-range tab index means "all", and an empty query matches everything.

use crate::domain::{
    InventoryRecord, MenuCategory, MenuRecord, OrderRecord, OrderStatus, StaffRecord,
    StaffStatus, TableRecord, TableStatus,
};
use std::borrow::Cow;

/// Label of the category chip that disables category filtering.
pub const ALL_SENTINEL: &str = "All";

/// A record that belongs to exactly one category.
pub trait Categorized {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;
}

impl Categorized for InventoryRecord {
    type Category = String;

    fn category(&self) -> &String {
        &self.category
    }
}

impl Categorized for MenuRecord {
    type Category = MenuCategory;

    fn category(&self) -> &MenuCategory {
        &self.category
    }
}

/// The category chip a screen has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    /// The `"All"` sentinel: no filtering.
    All,
    /// Keep only records of this category.
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        Self::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    /// Whether `record` passes this selection.
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Categorized<Category = C>,
    {
        match self {
            Self::All => true,
            Self::Only(category) => record.category() == category,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl CategoryFilter<String> {
    /// Maps a chip label to a selection. `"All"` is the sentinel; any other
    /// label, known or not, filters on that exact category string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_SENTINEL {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    /// Chip label for this selection.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(category) => category,
        }
    }
}

impl CategoryFilter<MenuCategory> {
    /// Maps a chip label to a menu selection, `None` when the label names no
    /// menu category.
    #[must_use]
    pub fn from_menu_label(label: &str) -> Option<Self> {
        if label.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Some(Self::All);
        }
        MenuCategory::from_label(label).map(Self::Only)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Only(category) => category.label(),
        }
    }
}

/// Keeps the records whose category equals the selection, in input order.
///
/// [`CategoryFilter::All`] returns the whole collection unchanged.
pub fn filter_by_category<'a, T, I>(records: I, selection: &CategoryFilter<T::Category>) -> Vec<&'a T>
where
    T: Categorized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| selection.matches(*record))
        .collect()
}

/// A record with a closed status enumeration.
pub trait HasStatus {
    type Status: Copy + Eq + 'static;

    fn status(&self) -> Self::Status;
}

impl HasStatus for StaffRecord {
    type Status = StaffStatus;

    fn status(&self) -> StaffStatus {
        self.status
    }
}

impl HasStatus for OrderRecord {
    type Status = OrderStatus;

    fn status(&self) -> OrderStatus {
        self.status
    }
}

impl HasStatus for TableRecord {
    type Status = TableStatus;

    fn status(&self) -> TableStatus {
        self.status
    }
}

/// One tab in a status tab row. `status: None` is the "all" tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTab<S> {
    pub label: &'static str,
    pub status: Option<S>,
}

/// Fixed lookup table from tab index to status predicate.
///
/// Index 0 is conventionally the "all" tab. Any index past the end of the
/// table also resolves to "all".
#[derive(Debug, Clone, Copy)]
pub struct StatusTabs<S: 'static> {
    tabs: &'static [StatusTab<S>],
}

impl<S: Copy + Eq> StatusTabs<S> {
    #[must_use]
    pub const fn new(tabs: &'static [StatusTab<S>]) -> Self {
        Self { tabs }
    }

    /// Status selected by `index`, `None` meaning "all".
    #[must_use]
    pub fn status_for(&self, index: usize) -> Option<S> {
        self.tabs.get(index).and_then(|tab| tab.status)
    }

    /// Clamps an index into the table, out-of-range indexes falling back to 0.
    #[must_use]
    pub const fn resolve(&self, index: usize) -> usize {
        if index < self.tabs.len() {
            index
        } else {
            0
        }
    }

    /// Tab index showing `status`, if the table has one.
    #[must_use]
    pub fn index_of(&self, status: S) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.status == Some(status))
    }

    #[must_use]
    pub fn label(&self, index: usize) -> &'static str {
        self.tabs
            .get(self.resolve(index))
            .map_or(ALL_SENTINEL, |tab| tab.label)
    }

    #[must_use]
    pub const fn tabs(&self) -> &'static [StatusTab<S>] {
        self.tabs
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tabs.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Whether `record` is visible under tab `index`.
    pub fn matches<T>(&self, index: usize, record: &T) -> bool
    where
        T: HasStatus<Status = S>,
    {
        self.status_for(index)
            .map_or(true, |status| record.status() == status)
    }
}

const STAFF_TAB_TABLE: &[StatusTab<StaffStatus>] = &[
    StatusTab { label: "All Staff", status: None },
    StatusTab { label: "Active", status: Some(StaffStatus::Active) },
    StatusTab { label: "Off-duty", status: Some(StaffStatus::OffDuty) },
    StatusTab { label: "On Leave", status: Some(StaffStatus::OnLeave) },
];

const ORDER_TAB_TABLE: &[StatusTab<OrderStatus>] = &[
    StatusTab { label: "All Orders", status: None },
    StatusTab { label: "New", status: Some(OrderStatus::New) },
    StatusTab { label: "Preparing", status: Some(OrderStatus::Preparing) },
    StatusTab { label: "Ready", status: Some(OrderStatus::Ready) },
    StatusTab { label: "Delivered", status: Some(OrderStatus::Delivered) },
    StatusTab { label: "Cancelled", status: Some(OrderStatus::Cancelled) },
];

const TABLE_TAB_TABLE: &[StatusTab<TableStatus>] = &[
    StatusTab { label: "All Tables", status: None },
    StatusTab { label: "Available", status: Some(TableStatus::Available) },
    StatusTab { label: "Occupied", status: Some(TableStatus::Occupied) },
    StatusTab { label: "Reserved", status: Some(TableStatus::Reserved) },
    StatusTab { label: "Cleaning", status: Some(TableStatus::Cleaning) },
];

/// Staff screen tabs: All Staff, Active, Off-duty, On Leave.
pub const STAFF_TABS: StatusTabs<StaffStatus> = StatusTabs::new(STAFF_TAB_TABLE);

/// Orders screen tabs: All Orders followed by every [`OrderStatus`].
pub const ORDER_TABS: StatusTabs<OrderStatus> = StatusTabs::new(ORDER_TAB_TABLE);

/// Tables screen filter chips: All Tables followed by every [`TableStatus`].
pub const TABLE_TABS: StatusTabs<TableStatus> = StatusTabs::new(TABLE_TAB_TABLE);

/// Keeps the records matching the status behind `tab_index`, in input order.
///
/// An out-of-range index is treated as the "all" tab.
pub fn filter_by_status_tab<'a, T, I>(records: I, tab_index: usize, tabs: &StatusTabs<T::Status>) -> Vec<&'a T>
where
    T: HasStatus + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| tabs.matches(tab_index, *record))
        .collect()
}

/// A normalized free-text query: trimmed and lowercased once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.trim().to_lowercase(),
        }
    }

    /// True for an empty or whitespace-only query, which matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test against a single field.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    /// Whether any of `fields` contains the query.
    pub fn matches_any<I, S>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.is_empty() || fields.into_iter().any(|field| self.matches_text(field.as_ref()))
    }

    /// Whether the record's default search fields contain the query.
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.is_empty() || self.matches_any(record.search_fields())
    }
}

/// Keeps the records for which any extracted field contains `query`,
/// ignoring case. An empty query keeps everything.
///
/// ```
/// use dishboard::engine::filter_by_search_query;
/// use dishboard::fixtures;
///
/// let staff = fixtures::staff();
/// let hits = filter_by_search_query(&staff, "CHEF", |s| [s.name.as_str(), s.role.as_str()]);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Rajesh Kumar");
/// ```
pub fn filter_by_search_query<'a, T, I, F, J, S>(records: I, query: &str, fields: F) -> Vec<&'a T>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&'a T) -> J,
    J: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let query = SearchQuery::new(query);
    records
        .into_iter()
        .filter(|record| query.matches_any(fields(*record)))
        .collect()
}

/// Default text fields a record is searched by.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

impl Searchable for InventoryRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::Borrowed(&self.name), Cow::Borrowed(&self.category)]
    }
}

impl Searchable for MenuRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(&self.name),
            Cow::Borrowed(&self.description),
            Cow::Borrowed(self.category.label()),
        ]
    }
}

impl Searchable for OrderRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields: Vec<Cow<'_, str>> = self
            .line_items
            .iter()
            .map(|item| Cow::Borrowed(item.name.as_str()))
            .collect();
        if let Some(instructions) = &self.special_instructions {
            fields.push(Cow::Borrowed(instructions));
        }
        fields.push(Cow::Owned(format!("Table {}", self.table_number)));
        fields
    }
}

impl Searchable for StaffRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(&self.name),
            Cow::Borrowed(&self.role),
            Cow::Borrowed(&self.shift),
        ]
    }
}

impl Searchable for TableRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![Cow::Owned(format!("Table {}", self.id))];
        if let Some(customer) = &self.customer_name {
            fields.push(Cow::Borrowed(customer.as_str()));
        }
        fields
    }
}

/// [`filter_by_search_query`] over the record type's [`Searchable`] fields.
pub fn search<'a, T, I>(records: I, query: &str) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let query = SearchQuery::new(query);
    records
        .into_iter()
        .filter(|record| query.matches(*record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn all_sentinel_is_identity() {
        let items = fixtures::inventory();
        let view = filter_by_category(&items, &CategoryFilter::from_label("All"));
        assert_eq!(view, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn category_filter_keeps_input_order() {
        let items = fixtures::inventory();
        let view = filter_by_category(&items, &CategoryFilter::from_label("Vegetables"));
        let names: Vec<&str> = view.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Tomatoes", "Onions"]);
    }

    #[test]
    fn unknown_category_is_empty_not_error() {
        let items = fixtures::inventory();
        assert!(filter_by_category(&items, &CategoryFilter::from_label("Seafood")).is_empty());
    }

    #[test]
    fn menu_category_labels() {
        assert_eq!(
            CategoryFilter::<MenuCategory>::from_menu_label("all"),
            Some(CategoryFilter::All)
        );
        assert_eq!(
            CategoryFilter::<MenuCategory>::from_menu_label("Desserts"),
            Some(CategoryFilter::Only(MenuCategory::Desserts))
        );
        assert_eq!(CategoryFilter::<MenuCategory>::from_menu_label("Soups"), None);

        let menu = fixtures::menu();
        let desserts = filter_by_category(&menu, &CategoryFilter::Only(MenuCategory::Desserts));
        assert_eq!(desserts.len(), 1);
        assert_eq!(desserts[0].name, "Gulab Jamun");
    }

    #[test]
    fn staff_tabs_resolve() {
        let staff = fixtures::staff();
        assert_eq!(filter_by_status_tab(&staff, 0, &STAFF_TABS).len(), 5);
        assert_eq!(filter_by_status_tab(&staff, 1, &STAFF_TABS).len(), 3);
        assert_eq!(filter_by_status_tab(&staff, 2, &STAFF_TABS).len(), 1);
        assert_eq!(filter_by_status_tab(&staff, 3, &STAFF_TABS).len(), 1);
        assert_eq!(filter_by_status_tab(&staff, 99, &STAFF_TABS).len(), 5);
    }

    #[test]
    fn tab_table_lookups() {
        assert_eq!(ORDER_TABS.len(), 6);
        assert_eq!(ORDER_TABS.index_of(OrderStatus::New), Some(1));
        assert_eq!(ORDER_TABS.status_for(0), None);
        assert_eq!(ORDER_TABS.status_for(42), None);
        assert_eq!(TABLE_TABS.label(2), "Occupied");
        assert_eq!(TABLE_TABS.label(17), "All Tables");
        assert_eq!(TABLE_TABS.resolve(17), 0);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let staff = fixtures::staff();
        let hits = filter_by_search_query(&staff, "  sHaRmA ", |s| [s.name.as_str()]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn empty_or_blank_query_keeps_everything() {
        let staff = fixtures::staff();
        assert_eq!(filter_by_search_query(&staff, "", |s| [s.name.as_str()]).len(), 5);
        assert_eq!(filter_by_search_query(&staff, "   ", |s| [s.name.as_str()]).len(), 5);
    }

    #[test]
    fn searchable_defaults_cover_derived_fields() {
        let orders = fixtures::orders_at(0);
        let table_seven = search(&orders, "table 7");
        assert_eq!(table_seven.len(), 1);
        assert_eq!(table_seven[0].id, "3");

        let tables = fixtures::tables();
        let priya = search(&tables, "priya");
        assert_eq!(priya.len(), 1);
        assert_eq!(priya[0].id, 7);

        let menu = fixtures::menu();
        assert_eq!(search(&menu, "main course").len(), 1);
        assert_eq!(search(&menu, "yogurt").len(), 1);
    }

    #[test]
    fn filters_chain_on_views() {
        let items = fixtures::inventory();
        let dairy = filter_by_category(&items, &CategoryFilter::from_label("Dairy"));
        let butter = search(dairy, "butter");
        assert_eq!(butter.len(), 1);
        assert_eq!(butter[0].id, 9);
    }

    #[test]
    fn tables_match_number_and_guest_name() {
        let tables = vec![
            TableRecord::new(3, 4, TableStatus::Reserved).reserved_for("Anil Kapoor", "19:30"),
            TableRecord::new(12, 2, TableStatus::Available),
        ];
        let by_guest = search(&tables, "kapoor");
        assert_eq!(by_guest.len(), 1);
        assert_eq!(by_guest[0].id, 3);
        assert_eq!(search(&tables, "table 12").len(), 1);
        assert!(search(&tables, "table 4").is_empty());
    }
}
