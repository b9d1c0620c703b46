use async_trait::async_trait;

use crate::dashboard::application::domain::stats::{DashboardStats, PropertyCounts};
use crate::dashboard::application::ports::incoming::use_cases::{
    GetDashboardStatsError, GetDashboardStatsUseCase,
};
use crate::dashboard::application::ports::outgoing::{StatsQuery, StatsQueryError};

pub struct GetDashboardStatsService<Q>
where
    Q: StatsQuery,
{
    stats_query: Q,
}

impl<Q> GetDashboardStatsService<Q>
where
    Q: StatsQuery,
{
    pub fn new(stats_query: Q) -> Self {
        Self { stats_query }
    }
}

fn to_use_case_error(e: StatsQueryError) -> GetDashboardStatsError {
    GetDashboardStatsError::RepositoryError(e.to_string())
}

#[async_trait]
impl<Q> GetDashboardStatsUseCase for GetDashboardStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardStats, GetDashboardStatsError> {
        let rows = self
            .stats_query
            .property_status_counts()
            .await
            .map_err(to_use_case_error)?;

        let sellers = self
            .stats_query
            .seller_counts()
            .await
            .map_err(to_use_case_error)?;

        let enquiries = self
            .stats_query
            .enquiry_count()
            .await
            .map_err(to_use_case_error)?;

        Ok(DashboardStats {
            properties: PropertyCounts::from_status_counts(rows),
            sellers,
            enquiries,
        })
    }
}
