//! dishboard: filter and aggregate view models for a restaurant dashboard.
//!
//! Every screen of a restaurant-management dashboard is, underneath, a small
//! collection of records plus a selection (category chip, status tab, search
//! text) from which it derives a visible subset and a handful of summary
//! figures. dishboard implements that layer:
//! - Typed records for inventory, menu, orders, staff and tables
//! - A pure filter/aggregate engine with exact money arithmetic
//! - One view-model object per screen with explicit setters
//! - Display descriptors, TOML themes and a plain-text renderer
//! - Built-in sample data and a validated JSON fixture format

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← key=value args
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Screen state
//! │  - Selection setters                                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Fixtures      │
//! │ (ui/)         │   │ (engine/)     │   │ (fixtures/)   │
//! │ - Rendering   │   │ - Filters     │   │ - Built-in    │
//! │ - Theming     │   │ - Low stock   │   │ - JSON files  │
//! │ - Descriptors │   │ - Aggregates  │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Records, enums, Money, errors (domain/)          │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Records, status enums, [`Money`], errors
//! - [`engine`]: Category/status/search filters, low stock, aggregates, reports
//! - [`app`]: Per-screen view-model objects
//! - [`fixtures`]: Built-in collections and the JSON fixture format
//! - [`ui`]: Descriptors, themes, view models, renderer
//! - [`observability`]: Tracing subscriber setup
//! - [`infrastructure`]: Data directory and path helpers
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments:
//!
//! ```text
//! dishboard screen=inventory category=Spices plain=true
//! dishboard screen=orders tab=0 query=naan currency=$
//! dishboard screen=reports range="This Month" theme=dishboard-dark
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use dishboard::{initialize, Config};
//!
//! let config = Config::from_args(["screen=staff", "tab=1", "plain=true"])?;
//! let dashboard = initialize(&config, Utc::now())?;
//! let text = dashboard.render();
//! assert!(text.contains("Showing 3 of 5 staff"));
//! # Ok::<(), dishboard::DishboardError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod fixtures;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{ActiveScreen, Screen, Selection, DEFAULT_CURRENCY};
pub use domain::{
    DishboardError, InventoryRecord, LineItem, MenuCategory, MenuRecord, Money, OrderRecord,
    OrderStatus, Result, StaffRecord, StaffStatus, TableRecord, TableStatus,
};
pub use fixtures::{Builtin, FixtureSet, FixtureSource};
pub use ui::{RenderOptions, Theme};

use chrono::{DateTime, Utc};
use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Keys accepted by [`Config::from_args`].
pub const CONFIG_KEYS: [&str; 14] = [
    "screen",
    "category",
    "tab",
    "query",
    "range",
    "theme",
    "theme_file",
    "fixture_file",
    "currency",
    "width",
    "plain",
    "trace_level",
    "log_file",
    "export_fixtures",
];

/// Runtime configuration.
///
/// Built from a string map so the binary can accept `key=value` arguments.
/// Values that fail to parse fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Screen to render. Default: [`Screen::Dashboard`]
    pub screen: Screen,

    /// Category chip label (inventory and menu screens).
    pub category: Option<String>,

    /// Status tab index (orders, staff and tables screens).
    pub tab: Option<usize>,

    /// Search text (every screen but reports).
    pub query: Option<String>,

    /// Time range label (reports screen), e.g. `"This Week"`.
    pub range: Option<String>,

    /// Built-in theme name: `dishboard-light` or `dishboard-dark`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// JSON fixture file used instead of the built-in collections.
    pub fixture_file: Option<String>,

    /// Currency symbol prefixed to amounts. Default: `"₹"`
    pub currency: String,

    /// Output width in columns. Default: 80
    pub width: usize,

    /// Emit no ANSI escape sequences.
    pub plain: bool,

    /// Tracing filter such as `debug` or `dishboard=trace`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file; relative paths are placed in the data directory.
    pub log_file: Option<String>,

    /// Writes the built-in collections as a fixture file to this path.
    pub export_fixtures: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            category: None,
            tab: None,
            query: None,
            range: None,
            theme_name: None,
            theme_file: None,
            fixture_file: None,
            currency: DEFAULT_CURRENCY.to_string(),
            width: ui::DEFAULT_WIDTH,
            plain: false,
            trace_level: None,
            log_file: None,
            export_fixtures: None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `screen`: case-insensitive screen name (falls back to Dashboard)
    /// - `tab`, `width`: unsigned integers (ignored / 80 on parse error)
    /// - `plain`: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
    /// - `currency`: any non-empty text (falls back to `₹`)
    /// - everything else: copied as-is, empty values ignored
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dishboard::{Config, Screen};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("screen".to_string(), "Orders".to_string());
    /// map.insert("tab".to_string(), "three".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.screen, Screen::Orders);
    /// assert_eq!(config.tab, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            map.get(key)
                .filter(|value| !value.trim().is_empty())
                .cloned()
        };

        Self {
            screen: map
                .get("screen")
                .and_then(|name| Screen::from_name(name))
                .unwrap_or(defaults.screen),
            category: text("category"),
            tab: map.get("tab").and_then(|s| s.trim().parse::<usize>().ok()),
            query: map.get("query").cloned(),
            range: text("range"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            fixture_file: text("fixture_file"),
            currency: text("currency").unwrap_or(defaults.currency),
            width: map
                .get("width")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|width| *width > 0)
                .unwrap_or(defaults.width),
            plain: map
                .get("plain")
                .and_then(|s| parse_bool(s))
                .unwrap_or(defaults.plain),
            trace_level: text("trace_level"),
            log_file: text("log_file"),
            export_fixtures: text("export_fixtures"),
        }
    }

    /// Parses `key=value` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`DishboardError::Config`] for an argument without `=` or with
    /// a key outside [`CONFIG_KEYS`].
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg.split_once('=').ok_or_else(|| {
                DishboardError::Config(format!("expected key=value, got '{arg}'"))
            })?;
            let key = key.trim();
            if !CONFIG_KEYS.contains(&key) {
                return Err(DishboardError::Config(format!("unknown option '{key}'")));
            }
            map.insert(key.to_string(), value.to_string());
        }
        Ok(Self::from_map(&map))
    }

    /// The selection to apply after entering the configured screen.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection {
            category: self.category.clone(),
            tab: self.tab,
            query: self.query.clone(),
            range: self.range.clone(),
        }
    }

    #[must_use]
    pub const fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            plain: self.plain,
        }
    }

    /// Resolves the theme: file first, then name, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }

    /// Loads the configured fixture file, or the built-in collections.
    ///
    /// # Errors
    ///
    /// Fails when the fixture file cannot be read, parsed or validated.
    pub fn load_fixtures(&self) -> Result<Box<dyn FixtureSource>> {
        match &self.fixture_file {
            Some(path) => Ok(Box::new(FixtureSet::load(expand_tilde(path))?)),
            None => Ok(Box::new(Builtin)),
        }
    }
}

/// A screen ready to render, with the theme and output options it renders with.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub screen: ActiveScreen,
    pub theme: Theme,
    pub options: RenderOptions,
}

impl Dashboard {
    #[must_use]
    pub fn render(&self) -> String {
        ui::render_screen(&self.screen, &self.theme, &self.options)
    }
}

/// Enters the configured screen with the configured selection applied.
///
/// # Errors
///
/// Fails when a configured fixture file cannot be loaded.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use dishboard::{initialize, Config, Screen};
///
/// let config = Config {
///     screen: Screen::Inventory,
///     category: Some("Spices".to_string()),
///     ..Config::default()
/// };
/// let dashboard = initialize(&config, Utc::now())?;
/// assert_eq!(dashboard.screen.compute_viewmodel().rows.len(), 2);
/// # Ok::<(), dishboard::DishboardError>(())
/// ```
pub fn initialize(config: &Config, now: DateTime<Utc>) -> Result<Dashboard> {
    tracing::debug!(screen = %config.screen, "initializing dishboard");

    let theme = config.load_theme();
    let fixtures = config.load_fixtures()?;

    let mut screen = ActiveScreen::enter(config.screen, fixtures.as_ref(), now, &config.currency);
    screen.apply(&config.selection());

    Ok(Dashboard {
        screen,
        theme,
        options: config.render_options(),
    })
}

/// Writes the built-in collections, timestamped against `now`, as a fixture file.
///
/// # Errors
///
/// Fails when the file cannot be written.
pub fn export_fixtures(path: &str, now: DateTime<Utc>) -> Result<std::path::PathBuf> {
    let path = std::path::PathBuf::from(expand_tilde(path));
    FixtureSet::builtin_at(now.timestamp_millis()).save(&path)?;
    tracing::info!(path = %path.display(), "exported fixtures");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.currency, "₹");
        assert_eq!(config.width, 80);
        assert!(!config.plain);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_map(&map(&[
            ("screen", "settings"),
            ("tab", "-1"),
            ("width", "0"),
            ("plain", "maybe"),
            ("currency", " "),
        ]));
        assert_eq!(config.screen, Screen::Dashboard);
        assert_eq!(config.tab, None);
        assert_eq!(config.width, 80);
        assert!(!config.plain);
        assert_eq!(config.currency, "₹");
    }

    #[test]
    fn parses_args() {
        let config = Config::from_args(["screen=Tables", "tab=2", "plain=yes", "currency=$", "query="]).unwrap();
        assert_eq!(config.screen, Screen::Tables);
        assert_eq!(config.tab, Some(2));
        assert!(config.plain);
        assert_eq!(config.currency, "$");
        assert_eq!(config.query.as_deref(), Some(""));
    }

    #[test]
    fn rejects_malformed_args() {
        let err = Config::from_args(["screen"]).unwrap_err();
        assert!(matches!(err, DishboardError::Config(_)));

        let err = Config::from_args(["colour=red"]).unwrap_err();
        assert!(err.to_string().contains("unknown option 'colour'"));
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, ui::DEFAULT_THEME);

        let config = Config {
            theme_name: Some("dishboard-dark".to_string()),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "dishboard-dark");
    }

    #[test]
    fn initialize_applies_selection() {
        let config = Config::from_args(["screen=orders", "tab=0", "plain=true"]).unwrap();
        let dashboard = initialize(&config, Utc::now()).unwrap();
        assert_eq!(dashboard.screen.screen(), Screen::Orders);

        let text = dashboard.render();
        assert!(text.contains("[All Orders]"));
        assert!(text.contains("Showing 3 of 3 orders"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn exported_fixtures_load_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fixtures.json");
        let now = Utc::now();
        export_fixtures(path.to_str().unwrap(), now).unwrap();

        let config = Config {
            screen: Screen::Tables,
            fixture_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        };
        let dashboard = initialize(&config, now).unwrap();
        assert_eq!(dashboard.screen.compute_viewmodel().rows.len(), 8);
    }

    #[test]
    fn missing_fixture_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            fixture_file: Some(dir.path().join("absent.json").to_string_lossy().into_owned()),
            ..Config::default()
        };
        assert!(matches!(initialize(&config, Utc::now()), Err(DishboardError::Io(_))));
    }
}
