use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Pending,
    Active,
    Inactive,
    Rejected,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown property status: {0}")]
pub struct UnknownStatus(pub String);

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 5] = [
        PropertyStatus::Pending,
        PropertyStatus::Active,
        PropertyStatus::Inactive,
        PropertyStatus::Rejected,
        PropertyStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "pending",
            PropertyStatus::Active => "active",
            PropertyStatus::Inactive => "inactive",
            PropertyStatus::Rejected => "rejected",
            PropertyStatus::Archived => "archived",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(PropertyStatus::Pending),
            "active" => Ok(PropertyStatus::Active),
            "inactive" => Ok(PropertyStatus::Inactive),
            "rejected" => Ok(PropertyStatus::Rejected),
            "archived" => Ok(PropertyStatus::Archived),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
