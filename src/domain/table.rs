//! Dining tables and their floor status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor status of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

impl TableStatus {
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Occupied,
        Self::Reserved,
        Self::Cleaning,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Reserved => "Reserved",
            Self::Cleaning => "Cleaning",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A table on the restaurant floor.
///
/// `current_occupancy <= capacity` is assumed here and checked when fixtures
/// are loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub id: u32,
    pub capacity: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub current_occupancy: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl TableRecord {
    #[must_use]
    pub const fn new(id: u32, capacity: u32, status: TableStatus) -> Self {
        Self {
            id,
            capacity,
            status,
            current_occupancy: 0,
            reservation_time: None,
            customer_name: None,
        }
    }

    #[must_use]
    pub fn seated(mut self, guests: u32) -> Self {
        self.current_occupancy = guests;
        self
    }

    #[must_use]
    pub fn reserved_for(mut self, customer: &str, time: &str) -> Self {
        self.customer_name = Some(customer.to_string());
        self.reservation_time = Some(time.to_string());
        self
    }

    /// Seat usage as shown on a table card, e.g. `3/4 seats`.
    #[must_use]
    pub fn seats_line(&self) -> String {
        format!("{}/{} seats", self.current_occupancy, self.capacity)
    }
}
