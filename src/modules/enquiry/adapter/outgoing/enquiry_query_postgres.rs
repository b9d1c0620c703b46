use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::{EnquiryView, LinkedProperty};
use crate::enquiry::application::ports::outgoing::{EnquiryQuery, EnquiryQueryError};
use crate::property::adapter::outgoing::sea_orm_entity::properties;

use super::sea_orm_entity::enquiries::{Column, Entity};

#[derive(Debug, Clone)]
pub struct EnquiryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnquiryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnquiryQuery for EnquiryQueryPostgres {
    async fn list(&self) -> Result<Vec<EnquiryView>, EnquiryQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut property_ids: Vec<Uuid> = models.iter().filter_map(|m| m.property_id).collect();
        property_ids.sort();
        property_ids.dedup();

        let linked: HashMap<Uuid, LinkedProperty> = if property_ids.is_empty() {
            HashMap::new()
        } else {
            properties::Entity::find()
                .filter(properties::Column::Id.is_in(property_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(|p| {
                    (
                        p.id,
                        LinkedProperty {
                            id: p.id,
                            title: p.title,
                            ref_number: p.ref_number,
                        },
                    )
                })
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|model| {
                let property = model.property_id.and_then(|id| linked.get(&id).cloned());
                EnquiryView {
                    enquiry: model.into(),
                    property,
                }
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> EnquiryQueryError {
    EnquiryQueryError::DatabaseError(e.to_string())
}
