use async_trait::async_trait;

use crate::dashboard::application::domain::stats::SellerCounts;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsQuery: Send + Sync {
    /// One `(status, count)` row per stored status value.
    async fn property_status_counts(&self) -> Result<Vec<(String, u64)>, StatsQueryError>;

    async fn seller_counts(&self) -> Result<SellerCounts, StatsQueryError>;

    async fn enquiry_count(&self) -> Result<u64, StatsQueryError>;
}
