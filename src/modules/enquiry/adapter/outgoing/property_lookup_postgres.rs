use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::LinkedProperty;
use crate::enquiry::application::ports::outgoing::{PropertyLookup, PropertyLookupError};
use crate::property::adapter::outgoing::sea_orm_entity::properties;

#[derive(Debug, Clone)]
pub struct PropertyLookupPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyLookupPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyLookup for PropertyLookupPostgres {
    async fn find_property(&self, id: Uuid) -> Result<Option<LinkedProperty>, PropertyLookupError> {
        let model = properties::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| PropertyLookupError::LookupFailed(e.to_string()))?;

        Ok(model.map(|p| LinkedProperty {
            id: p.id,
            title: p.title,
            ref_number: p.ref_number,
        }))
    }
}
