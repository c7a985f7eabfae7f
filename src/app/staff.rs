//! Staff screen.

use super::search::SearchInput;
use super::{empty_state, footer, status_chips};
use crate::domain::StaffRecord;
use crate::engine::{compute_aggregates, STAFF_TABS};
use crate::ui::descriptors::{palette, Describe};
use crate::ui::viewmodel::{Badge, DisplayRow, HeaderInfo, ScreenViewModel, StatCard};

/// View model of the staff screen.
#[derive(Debug, Clone)]
pub struct StaffScreen {
    members: Vec<StaffRecord>,
    tab: usize,
    search: SearchInput,
    visible: Vec<usize>,
}

impl StaffScreen {
    /// Enters the screen on the "All Staff" tab.
    #[must_use]
    pub fn new(members: Vec<StaffRecord>) -> Self {
        let mut screen = Self {
            members,
            tab: 0,
            search: SearchInput::default(),
            visible: Vec::new(),
        };
        screen.apply_filters();
        screen
    }

    #[must_use]
    pub fn members(&self) -> &[StaffRecord] {
        &self.members
    }

    #[must_use]
    pub const fn tab(&self) -> usize {
        self.tab
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&StaffRecord> {
        self.visible.iter().map(|&i| &self.members[i]).collect()
    }

    pub fn select_tab(&mut self, index: usize) {
        self.tab = STAFF_TABS.resolve(index);
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
        let _span = tracing::debug_span!("staff_filter",
            total_staff = self.members.len(),
            tab = STAFF_TABS.label(self.tab),
            query_len = self.search.text().len()
        )
        .entered();

        let query = self.search.query();
        let tab = self.tab;
        self.visible = self
            .members
            .iter()
            .enumerate()
            .filter(|(_, member)| STAFF_TABS.matches(tab, *member) && query.matches(*member))
            .map(|(i, _)| i)
            .collect();

        tracing::debug!(visible = self.visible.len(), "staff filter applied");
    }

    #[must_use]
    pub fn compute_viewmodel(&self) -> ScreenViewModel {
        let stats = compute_aggregates(&self.members);

        let card = |label: &str, value: usize, color: &str| StatCard {
            label: label.to_string(),
            value: value.to_string(),
            color: color.to_string(),
            caption: None,
        };
        let stat_cards = vec![
            card("Total Staff", stats.total_staff, palette::STAFF),
            card("Active Now", stats.active_count, palette::MODERN_GREEN),
            card("On Leave", stats.on_leave_count, palette::MODERN_ORANGE),
        ];

        let rows: Vec<DisplayRow> = self
            .visible()
            .into_iter()
            .map(|member| {
                let descriptor = member.status.descriptor();
                DisplayRow {
                    title: member.name.clone(),
                    subtitle: format!("{} | {} shift", member.role, member.shift),
                    trailing: member.initial().to_string(),
                    badge: Some(Badge {
                        label: descriptor.label.to_string(),
                        color: descriptor.color.to_string(),
                    }),
                    tags: Vec::new(),
                    details: vec![member.phone.clone(), member.email.clone()],
                    is_muted: false,
                }
            })
            .collect();

        let empty = rows
            .is_empty()
            .then(|| empty_state("No staff members found", "Try another tab or search term"));

        ScreenViewModel {
            header: HeaderInfo {
                title: "Staff".to_string(),
                subtitle: "Team, shifts and availability".to_string(),
                accent: palette::STAFF.to_string(),
            },
            chips: status_chips(&STAFF_TABS, self.tab, palette::STAFF),
            search_bar: Some(self.search.bar_info("Search staff...")),
            stats: stat_cards,
            banner: None,
            footer: footer(rows.len(), self.members.len(), "staff"),
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
    fn active_tab_then_out_of_range() {
        let mut screen = StaffScreen::new(fixtures::staff());
        screen.select_tab(1);
        assert_eq!(screen.visible().len(), 3);

        screen.select_tab(99);
        assert_eq!(screen.visible().len(), 5);
        assert_eq!(screen.tab(), 0);
    }

    #[test]
    fn stats_cover_everyone_regardless_of_tab() {
        let mut screen = StaffScreen::new(fixtures::staff());
        screen.select_tab(3);
        let vm = screen.compute_viewmodel();
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].title, "Suresh Verma");
        assert_eq!(vm.stat("Total Staff").unwrap().value, "5");
        assert_eq!(vm.stat("Active Now").unwrap().value, "3");
        assert_eq!(vm.stat("On Leave").unwrap().value, "1");
        assert_eq!(vm.selected_chip().unwrap().label, "On Leave");
    }

    #[test]
    fn search_matches_role_and_shift() {
        let mut screen = StaffScreen::new(fixtures::staff());
        screen.set_search_query("morning");
        let names: Vec<_> = screen.visible().into_iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rajesh Kumar", "Neha Gupta"]);

        screen.clear_search();
        screen.set_search_query("  SERVER ");
        assert_eq!(screen.visible()[0].name, "Priya Sharma");
    }

    #[test]
    fn empty_collection_has_zero_stats() {
        let vm = StaffScreen::new(Vec::new()).compute_viewmodel();
        assert_eq!(vm.stat("Total Staff").unwrap().value, "0");
        assert!(vm.empty_state.is_some());
    }
}
