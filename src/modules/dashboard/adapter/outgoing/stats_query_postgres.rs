use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QuerySelect,
};
use std::sync::Arc;

use crate::dashboard::application::domain::stats::SellerCounts;
use crate::dashboard::application::ports::outgoing::{StatsQuery, StatsQueryError};
use crate::enquiry::adapter::outgoing::sea_orm_entity::enquiries;
use crate::property::adapter::outgoing::sea_orm_entity::properties;
use crate::seller::adapter::outgoing::sea_orm_entity::sellers;

#[derive(Debug, Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct StatusCountRow {
    status: String,
    count: i64,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn property_status_counts(&self) -> Result<Vec<(String, u64)>, StatsQueryError> {
        let rows = properties::Entity::find()
            .select_only()
            .column(properties::Column::Status)
            .column_as(Expr::col(properties::Column::Id).count(), "count")
            .group_by(properties::Column::Status)
            .into_model::<StatusCountRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|r| (r.status, r.count.max(0) as u64))
            .collect())
    }

    async fn seller_counts(&self) -> Result<SellerCounts, StatsQueryError> {
        let total = sellers::Entity::find()
            .filter(sellers::Column::IsDeleted.eq(false))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let active = sellers::Entity::find()
            .filter(sellers::Column::IsDeleted.eq(false))
            .filter(sellers::Column::IsActive.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let deleted = sellers::Entity::find()
            .filter(sellers::Column::IsDeleted.eq(true))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(SellerCounts {
            total,
            active,
            deleted,
        })
    }

    async fn enquiry_count(&self) -> Result<u64, StatsQueryError> {
        enquiries::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn map_db_err(e: DbErr) -> StatsQueryError {
    StatsQueryError::DatabaseError(e.to_string())
}
