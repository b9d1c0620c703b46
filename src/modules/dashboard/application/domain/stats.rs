use serde::Serialize;

use crate::property::application::domain::status::PropertyStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyCounts {
    pub total: u64,
    pub pending: u64,
    pub active: u64,
    pub inactive: u64,
    pub rejected: u64,
    pub archived: u64,
}

impl PropertyCounts {
    /// Folds `(status, count)` rows. Rows with an unknown status still count
    /// toward the total.
    pub fn from_status_counts<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut counts = Self::default();

        for (status, count) in rows {
            counts.total += count;
            match status.parse::<PropertyStatus>() {
                Ok(PropertyStatus::Pending) => counts.pending += count,
                Ok(PropertyStatus::Active) => counts.active += count,
                Ok(PropertyStatus::Inactive) => counts.inactive += count,
                Ok(PropertyStatus::Rejected) => counts.rejected += count,
                Ok(PropertyStatus::Archived) => counts.archived += count,
                Err(_) => {}
            }
        }

        counts
    }
}

/// `total` excludes soft-deleted sellers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SellerCounts {
    pub total: u64,
    pub active: u64,
    pub deleted: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub properties: PropertyCounts,
    pub sellers: SellerCounts,
    pub enquiries: u64,
}
