//! Menu dishes and their closed category set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default preparation time for a dish, in minutes.
pub const DEFAULT_PREP_TIME_MINUTES: u32 = 15;

/// Menu section a dish belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    #[serde(rename = "Starters")]
    Starters,
    #[serde(rename = "Main Course")]
    MainCourse,
    #[serde(rename = "Desserts")]
    Desserts,
    #[serde(rename = "Beverages")]
    Beverages,
    #[serde(rename = "Specials")]
    Specials,
}

impl MenuCategory {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Starters,
        Self::MainCourse,
        Self::Desserts,
        Self::Beverages,
        Self::Specials,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Starters => "Starters",
            Self::MainCourse => "Main Course",
            Self::Desserts => "Desserts",
            Self::Beverages => "Beverages",
            Self::Specials => "Specials",
        }
    }

    /// Parses a label case-insensitively, ignoring spaces, dashes and underscores.
    ///
    /// `"main course"`, `"Main-Course"` and `"MAIN_COURSE"` all resolve to
    /// [`MenuCategory::MainCourse`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|category| normalize(category.label()) == wanted)
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: MenuCategory,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default = "default_prep_time")]
    pub prep_time_minutes: u32,
}

const fn default_true() -> bool {
    true
}

const fn default_prep_time() -> u32 {
    DEFAULT_PREP_TIME_MINUTES
}

impl MenuRecord {
    /// Creates an available, non-vegetarian, non-spicy dish with the default
    /// preparation time. Chain the `with_*` builders to adjust.
    #[must_use]
    pub fn new(id: &str, name: &str, description: &str, price: f64, category: MenuCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            is_available: true,
            is_vegetarian: false,
            is_spicy: false,
            prep_time_minutes: DEFAULT_PREP_TIME_MINUTES,
        }
    }

    #[must_use]
    pub fn vegetarian(mut self) -> Self {
        self.is_vegetarian = true;
        self
    }

    #[must_use]
    pub fn spicy(mut self) -> Self {
        self.is_spicy = true;
        self
    }

    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    #[must_use]
    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time_minutes = minutes;
        self
    }

    /// Short dietary/timing tags for a dish card, e.g. `["Veg", "Spicy", "15 min"]`.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if self.is_vegetarian {
            tags.push("Veg".to_string());
        }
        if self.is_spicy {
            tags.push("Spicy".to_string());
        }
        tags.push(format!("{} min", self.prep_time_minutes));
        if !self.is_available {
            tags.push("Unavailable".to_string());
        }
        tags
    }
}
