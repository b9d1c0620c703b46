use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::Enquiry;
use crate::enquiry::application::ports::outgoing::{
    EnquiryRepository, EnquiryRepositoryError, NewEnquiryData,
};

use super::sea_orm_entity::enquiries::{ActiveModel, Entity};

#[derive(Debug, Clone)]
pub struct EnquiryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EnquiryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnquiryRepository for EnquiryRepositoryPostgres {
    async fn create(&self, data: NewEnquiryData) -> Result<Enquiry, EnquiryRepositoryError> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            ref_number: Set(data.ref_number),
            property_id: Set(data.property_id),
            property_ref: Set(data.property_ref),
            property_title: Set(data.property_title),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            message: Set(data.message),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), EnquiryRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EnquiryRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> EnquiryRepositoryError {
    EnquiryRepositoryError::DatabaseError(e.to_string())
}
