use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::outgoing::{BlogQuery, BlogQueryError};

use super::sea_orm_entity::blogs::{Column, Entity};

#[derive(Debug, Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, BlogQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(Blog::from))
    }

    async fn list(&self, include_drafts: bool, limit: u64) -> Result<Vec<Blog>, BlogQueryError> {
        let mut select = Entity::find();
        if !include_drafts {
            select = select.filter(Column::Published.eq(true));
        }

        let models = select
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(Blog::from).collect())
    }
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}
