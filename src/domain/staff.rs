//! Staff members and their duty status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Duty status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StaffStatus {
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Off-duty")]
    OffDuty,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl StaffStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::OffDuty, Self::OnLeave];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OffDuty => "Off-duty",
            Self::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One member of the restaurant team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub status: StaffStatus,
    pub shift: String,
    pub phone: String,
    pub email: String,
}

impl StaffRecord {
    #[must_use]
    pub fn new(
        id: u32,
        name: &str,
        role: &str,
        status: StaffStatus,
        shift: &str,
        phone: &str,
        email: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            role: role.to_string(),
            status,
            shift: shift.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    /// First letter of the name, used as the avatar glyph.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
