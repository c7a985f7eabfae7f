//! Search box state shared by the list screens.

use crate::engine::SearchQuery;
use crate::ui::viewmodel::SearchBarInfo;

/// Text typed into a screen's search box.
///
/// Keeps the raw text for display and a normalized [`SearchQuery`] for
/// matching, updated together on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    query: SearchQuery,
}

impl SearchInput {
    /// Raw text as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.query = SearchQuery::new(&self.text);
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.query = SearchQuery::new(&self.text);
    }

    /// Removes the last character, returning `false` when already empty.
    pub fn pop(&mut self) -> bool {
        let popped = self.text.pop().is_some();
        if popped {
            self.query = SearchQuery::new(&self.text);
        }
        popped
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.query = SearchQuery::default();
    }

    pub(crate) fn bar_info(&self, placeholder: &str) -> SearchBarInfo {
        SearchBarInfo {
            query: self.text.clone(),
            placeholder: placeholder.to_string(),
        }
    }
}
