//! Tables screen: floor status chips, seat usage and reservations.

use super::search::SearchInput;
use super::{empty_state, footer, status_chips};
use crate::domain::{TableRecord, TableStatus};
use crate::engine::{compute_aggregates, percent, TABLE_TABS};
use crate::ui::descriptors::{palette, Describe};
use crate::ui::viewmodel::{Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};

/// View model of the tables screen.
#[derive(Debug, Clone)]
pub struct TablesScreen {
    tables: Vec<TableRecord>,
    tab: usize,
    search: SearchInput,
    visible: Vec<usize>,
}

impl TablesScreen {
    /// Enters the screen on the "All Tables" chip.
    #[must_use]
    pub fn new(tables: Vec<TableRecord>) -> Self {
        let mut screen = Self {
            tables,
            tab: 0,
            search: SearchInput::default(),
            visible: Vec::new(),
        };
        screen.apply_filters();
        screen
    }

    #[must_use]
    pub fn tables(&self) -> &[TableRecord] {
        &self.tables
    }

    #[must_use]
    pub const fn tab(&self) -> usize {
        self.tab
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&TableRecord> {
        self.visible.iter().map(|&i| &self.tables[i]).collect()
    }

    pub fn select_tab(&mut self, index: usize) {
        self.tab = TABLE_TABS.resolve(index);
        self.apply_filters();
    }

    pub fn select_status(&mut self, status: TableStatus) {
        self.select_tab(TABLE_TABS.index_of(status).unwrap_or(0));
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
        let _span = tracing::debug_span!("tables_filter",
            total_tables = self.tables.len(),
            tab = TABLE_TABS.label(self.tab),
            query_len = self.search.text().len()
        )
        .entered();

        let query = self.search.query();
        let tab = self.tab;
        self.visible = self
            .tables
            .iter()
            .enumerate()
            .filter(|(_, table)| TABLE_TABS.matches(tab, *table) && query.matches(*table))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(visible = self.visible.len(), "tables filter applied");
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let stats = compute_aggregates(&self.tables);

        let stat_cards = vec![
            StatCard {
                label: "Total Tables".to_string(),
                value: stats.total_tables.to_string(),
                color: palette::TABLES.to_string(),
                caption: None,
            },
            StatCard {
                label: "Available".to_string(),
                value: stats.available.to_string(),
                color: palette::MODERN_GREEN.to_string(),
                caption: None,
            },
            StatCard {
                label: "Occupied".to_string(),
                value: format!("{}/{}", stats.occupied, stats.total_tables),
                color: palette::MODERN_RED.to_string(),
                caption: Some(format!("{}%", percent(stats.occupancy_ratio()))),
            },
            StatCard {
                label: "Seats In Use".to_string(),
                value: format!("{}/{}", stats.seats_in_use, stats.seat_capacity),
                color: palette::MODERN_ORANGE.to_string(),
                caption: Some(format!("{}%", percent(stats.seat_ratio()))),
            },
        ];

        let rows: Vec<DisplayRow> = self
            .visible()
            .into_iter()
            .map(|table| {
                let descriptor = table.status.descriptor();
                let details = match (&table.customer_name, &table.reservation_time) {
                    (Some(customer), Some(time)) => vec![format!("Reserved for {customer} at {time}")],
                    (Some(customer), None) => vec![format!("Reserved for {customer}")],
                    _ => Vec::new(),
                };
                DisplayRow {
                    title: format!("Table {}", table.id),
                    subtitle: format!("Seats {}", table.capacity),
                    trailing: table.seats_line(),
                    badge: Some(Badge {
                        label: descriptor.label.to_string(),
                        color: descriptor.color.to_string(),
                    }),
                    tags: Vec::new(),
                    details,
                    is_muted: table.status == TableStatus::Cleaning,
                }
            })
            .collect();

        let empty = rows
            .is_empty()
            .then(|| empty_state("No tables found", "Try another status or search term"));

        ScreenViewModel {
            header: HeaderInfo {
                title: "Tables".to_string(),
                subtitle: "Floor status and reservations".to_string(),
                accent: palette::TABLES.to_string(),
            },
            chips: status_chips(&TABLE_TABS, self.tab, palette::TABLES),
            search_bar: Some(self.search.bar_info("Search by table or guest...")),
            stats: stat_cards,
            banner: None,
            footer: footer(rows.len(), self.tables.len(), "tables"),
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
    fn occupancy_cards() {
        let vm = TablesScreen::new(fixtures::tables()).compute_viewmodel();
        let occupied = vm.stat("Occupied").unwrap();
        assert_eq!(occupied.value, "2/8");
        assert_eq!(occupied.caption.as_deref(), Some("25%"));
        assert_eq!(vm.stat("Seats In Use").unwrap().value, "7/34");
        assert_eq!(vm.rows.len(), 8);
    }

    #[test]
    fn reserved_tab_lists_guests() {
        let mut screen = TablesScreen::new(fixtures::tables());
        screen.select_status(TableStatus::Reserved);
        let vm = screen.compute_viewmodel();
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].details, ["Reserved for Rahul Sharma at 19:30"]);
        assert_eq!(vm.rows[1].title, "Table 7");
    }

    #[test]
    fn search_by_guest_name() {
        let mut screen = TablesScreen::new(fixtures::tables());
        screen.set_search_query("priya");
        let ids: Vec<_> = screen.visible().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, [7]);
    }

    #[test]
    fn no_tables_means_zero_occupancy() {
        let vm = TablesScreen::new(Vec::new()).compute_viewmodel();
        assert_eq!(vm.stat("Occupied").unwrap().caption.as_deref(), Some("0%"));
        assert!(vm.empty_state.is_some());
    }
}
