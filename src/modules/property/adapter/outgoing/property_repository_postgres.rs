use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::{ModerationChange, SellerCascade};
use crate::property::application::ports::outgoing::{
    NewPropertyData, PropertyChanges, PropertyRepository, PropertyRepositoryError,
};
use crate::shared::patch::PatchField;

use super::sea_orm_entity::properties::{moderation_model, ActiveModel, Column, Entity, Model};
use super::seller_cascade;

#[derive(Debug, Clone)]
pub struct PropertyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PropertyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_json(values: &[String]) -> Result<serde_json::Value, PropertyRepositoryError> {
    serde_json::to_value(values).map_err(|e| PropertyRepositoryError::SerializationError(e.to_string()))
}

fn to_domain(model: Model) -> Result<Property, PropertyRepositoryError> {
    model
        .to_domain()
        .map_err(PropertyRepositoryError::SerializationError)
}

fn patch<T>(field: PatchField<T>, column: &mut sea_orm::ActiveValue<Option<T>>)
where
    Option<T>: Into<sea_orm::Value>,
{
    match field {
        PatchField::Unset => {}
        PatchField::Null => *column = Set(None),
        PatchField::Value(v) => *column = Set(Some(v)),
    }
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryPostgres {
    async fn create(&self, data: NewPropertyData) -> Result<Property, PropertyRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            ref_number: Set(data.ref_number),
            title: Set(data.title),
            description: Set(data.description),
            total_price: Set(data.total_price),
            square_meters: Set(data.square_meters),
            zip: Set(data.zip),
            place: Set(data.place),
            city: Set(data.city),
            country: Set(data.country),
            rooms: Set(data.rooms),
            bathrooms: Set(data.bathrooms),
            pool: Set(data.pool),
            parking: Set(data.parking),
            garden: Set(data.garden),
            property_type: Set(data.property_type),
            amenities: Set(to_json(&data.amenities)?),
            images: Set(to_json(&data.images)?),
            seller_id: Set(data.seller_id),
            agent_number: Set(data.agent_number),
            status: Set(data.status.as_str().to_string()),
            rejection_reason: Set(String::new()),
            submitted_by: Set(data.submitted_by),
            submitted_at: Set(data.submitted_at.map(|d| d.fixed_offset())),
            published_at: Set(data.published_at.map(|d| d.fixed_offset())),
            owner_removed: Set(false),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active.insert(&*self.db).await.map_err(map_insert_error)?;
        to_domain(inserted)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: PropertyChanges,
    ) -> Result<Property, PropertyRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        patch(changes.description, &mut model.description);
        patch(changes.total_price, &mut model.total_price);
        patch(changes.square_meters, &mut model.square_meters);
        patch(changes.zip, &mut model.zip);
        patch(changes.place, &mut model.place);
        patch(changes.city, &mut model.city);
        patch(changes.country, &mut model.country);
        patch(changes.rooms, &mut model.rooms);
        patch(changes.bathrooms, &mut model.bathrooms);
        patch(changes.property_type, &mut model.property_type);
        patch(changes.seller_id, &mut model.seller_id);

        if let Some(pool) = changes.pool {
            model.pool = Set(pool);
        }
        if let Some(parking) = changes.parking {
            model.parking = Set(parking);
        }
        if let Some(garden) = changes.garden {
            model.garden = Set(garden);
        }
        if let Some(amenities) = changes.amenities {
            model.amenities = Set(to_json(&amenities)?);
        }
        if let Some(images) = changes.images {
            model.images = Set(to_json(&images)?);
        }
        if let Some(agent_number) = changes.agent_number {
            model.agent_number = Set(agent_number);
        }
        if let Some(status) = changes.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(reason) = changes.rejection_reason {
            model.rejection_reason = Set(reason);
        }
        if let Some(published_at) = changes.published_at {
            model.published_at = Set(Some(published_at.fixed_offset()));
        }

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .ok_or(PropertyRepositoryError::NotFound)
            .and_then(to_domain)
    }

    async fn delete(&self, id: Uuid) -> Result<(), PropertyRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PropertyRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn apply_moderation(
        &self,
        id: Uuid,
        change: &ModerationChange,
    ) -> Result<Property, PropertyRepositoryError> {
        let updated = Entity::update_many()
            .set(moderation_model(change))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .ok_or(PropertyRepositoryError::NotFound)
            .and_then(to_domain)
    }

    async fn apply_seller_cascade(
        &self,
        seller_id: Uuid,
        cascade: SellerCascade,
    ) -> Result<u64, PropertyRepositoryError> {
        seller_cascade::apply_seller_cascade(&*self.db, seller_id, cascade)
            .await
            .map_err(map_db_err)
    }
}

// ref_number is the only unique column besides the key
fn map_insert_error(e: DbErr) -> PropertyRepositoryError {
    let msg = e.to_string().to_lowercase();
    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        PropertyRepositoryError::RefNumberTaken
    } else {
        map_db_err(e)
    }
}

fn map_db_err(e: DbErr) -> PropertyRepositoryError {
    PropertyRepositoryError::DatabaseError(e.to_string())
}
