//! JSON fixture files.
//!
//! A fixture file replaces the built-in collections with caller-supplied
//! records. Sections that are missing fall back to empty collections.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "inventory": [
//!     { "id": 1, "name": "Basmati Rice", "category": "Grains", "quantity": 50,
//!       "unit": "kg", "minThreshold": 20, "price": 85.0 }
//!   ],
//!   "menu": [],
//!   "orders": [
//!     { "id": "1", "tableNumber": 5, "status": "New", "timestampMillis": 1700000000000,
//!       "lineItems": [ { "name": "Naan", "quantity": 4, "price": 49.99 } ] }
//!   ],
//!   "staff": [],
//!   "tables": [ { "id": 1, "capacity": 2, "status": "Available" } ]
//! }
//! ```

use super::FixtureSource;
use crate::domain::error::{DishboardError, Result};
use crate::domain::{InventoryRecord, MenuRecord, OrderRecord, StaffRecord, TableRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

/// Current fixture file format version.
pub const FIXTURE_VERSION: u32 = 1;

/// Every collection the dashboard screens read, as stored in a fixture file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Version of the file format for future migrations.
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub inventory: Vec<InventoryRecord>,
    #[serde(default)]
    pub menu: Vec<MenuRecord>,
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub staff: Vec<StaffRecord>,
    #[serde(default)]
    pub tables: Vec<TableRecord>,
}

const fn default_version() -> u32 {
    FIXTURE_VERSION
}

impl Default for FixtureSet {
    fn default() -> Self {
        Self {
            version: FIXTURE_VERSION,
            inventory: Vec::new(),
            menu: Vec::new(),
            orders: Vec::new(),
            staff: Vec::new(),
            tables: Vec::new(),
        }
    }
}

impl FixtureSet {
    /// Snapshot of the built-in collections, with orders stamped at `now_millis`.
    #[must_use]
    pub fn builtin_at(now_millis: i64) -> Self {
        Self {
            version: FIXTURE_VERSION,
            inventory: super::inventory(),
            menu: super::menu(),
            orders: super::orders_at(now_millis),
            staff: super::staff(),
            tables: super::tables(),
        }
    }

    /// Parses and validates a fixture document.
    ///
    /// # Errors
    ///
    /// Returns [`DishboardError::Json`] for malformed JSON and
    /// [`DishboardError::Fixture`] when [`FixtureSet::validate`] fails.
    pub fn from_json(json: &str) -> Result<Self> {
        let set: Self = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    /// Loads and validates a fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// violates a collection invariant.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dishboard::fixtures::FixtureSet;
    ///
    /// let set = FixtureSet::load("/tmp/dishboard-fixtures.json")?;
    /// println!("{} inventory items", set.inventory.len());
    /// # Ok::<(), dishboard::DishboardError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_fixtures", path = %path.display()).entered();

        let contents = std::fs::read_to_string(path)?;
        let set = Self::from_json(&contents)?;

        tracing::debug!(
            version = set.version,
            inventory = set.inventory.len(),
            menu = set.menu.len(),
            orders = set.orders.len(),
            staff = set.staff.len(),
            tables = set.tables.len(),
            "loaded fixture file"
        );

        Ok(set)
    }

    /// Writes the set as pretty-printed JSON.
    ///
    /// Writes to a temporary file first, then renames it over the target so a
    /// crash never leaves a half-written file. Parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization, the temporary write, or the rename fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "saving fixture file");

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("tmp");

        tracing::trace!(tmp_path = %tmp_path.display(), "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, path)?;

        tracing::debug!("fixture file saved");
        Ok(())
    }

    /// Checks the invariants the engine assumes but never enforces.
    ///
    /// - ids are unique within each collection
    /// - no table seats more guests than its capacity
    ///
    /// # Errors
    ///
    /// Returns [`DishboardError::Fixture`] naming the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.version > FIXTURE_VERSION {
            return Err(DishboardError::Fixture(format!(
                "unsupported fixture version {} (newest known is {FIXTURE_VERSION})",
                self.version
            )));
        }

        ensure_unique("inventory", self.inventory.iter().map(|r| r.id))?;
        ensure_unique("menu", self.menu.iter().map(|r| r.id.as_str()))?;
        ensure_unique("orders", self.orders.iter().map(|r| r.id.as_str()))?;
        ensure_unique("staff", self.staff.iter().map(|r| r.id))?;
        ensure_unique("tables", self.tables.iter().map(|r| r.id))?;

        if let Some(table) = self
            .tables
            .iter()
            .find(|t| t.current_occupancy > t.capacity)
        {
            return Err(DishboardError::Fixture(format!(
                "table {} seats {} guests but has capacity {}",
                table.id, table.current_occupancy, table.capacity
            )));
        }

        Ok(())
    }
}

fn ensure_unique<K, I>(collection: &str, ids: I) -> Result<()>
where
    K: Eq + Hash + Display,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(DishboardError::Fixture(format!(
                "duplicate {collection} id {id}"
            )));
        }
        seen.insert(id);
    }
    Ok(())
}

impl FixtureSource for FixtureSet {
    fn inventory(&self) -> Vec<InventoryRecord> {
        self.inventory.clone()
    }

    fn menu(&self) -> Vec<MenuRecord> {
        self.menu.clone()
    }

    fn orders(&self, _now_millis: i64) -> Vec<OrderRecord> {
        self.orders.clone()
    }

    fn staff(&self) -> Vec<StaffRecord> {
        self.staff.clone()
    }

    fn tables(&self) -> Vec<TableRecord> {
        self.tables.clone()
    }
}
