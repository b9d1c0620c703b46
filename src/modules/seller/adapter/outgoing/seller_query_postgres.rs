use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::seller::application::domain::entities::Seller;
use crate::seller::application::ports::outgoing::{SellerQuery, SellerQueryError};

use super::sea_orm_entity::sellers::{Column, Entity};

#[derive(Debug, Clone)]
pub struct SellerQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SellerQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SellerQuery for SellerQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, SellerQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn list(&self, deleted: bool) -> Result<Vec<Seller>, SellerQueryError> {
        let models = Entity::find()
            .filter(Column::IsDeleted.eq(deleted))
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}

fn map_db_err(e: DbErr) -> SellerQueryError {
    SellerQueryError::DatabaseError(e.to_string())
}
