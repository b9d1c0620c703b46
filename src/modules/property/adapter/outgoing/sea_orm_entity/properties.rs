use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::ModerationChange;
use crate::property::application::domain::status::PropertyStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub ref_number: String,

    pub title: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Double", nullable)]
    pub total_price: Option<f64>,

    #[sea_orm(column_type = "Double", nullable)]
    pub square_meters: Option<f64>,

    pub zip: Option<String>,
    pub place: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub rooms: Option<i32>,
    pub bathrooms: Option<i32>,

    pub pool: bool,
    pub parking: bool,
    pub garden: bool,

    pub property_type: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub amenities: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub seller_id: Option<Uuid>,

    pub agent_number: String,

    /// One of pending, active, inactive, rejected, archived
    pub status: String,

    #[sea_orm(column_type = "Text")]
    pub rejection_reason: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub submitted_by: Option<Uuid>,

    pub submitted_at: Option<DateTimeWithTimeZone>,
    pub published_at: Option<DateTimeWithTimeZone>,

    pub owner_removed: bool,

    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Fails when a JSON column or the status does not decode.
    pub fn to_domain(&self) -> Result<Property, String> {
        let amenities: Vec<String> =
            serde_json::from_value(self.amenities.clone()).map_err(|e| e.to_string())?;
        let images: Vec<String> =
            serde_json::from_value(self.images.clone()).map_err(|e| e.to_string())?;
        let status = self
            .status
            .parse::<PropertyStatus>()
            .map_err(|e| e.to_string())?;

        Ok(Property {
            id: self.id,
            ref_number: self.ref_number.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            total_price: self.total_price,
            square_meters: self.square_meters,
            zip: self.zip.clone(),
            place: self.place.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            rooms: self.rooms,
            bathrooms: self.bathrooms,
            pool: self.pool,
            parking: self.parking,
            garden: self.garden,
            property_type: self.property_type.clone(),
            amenities,
            images,
            seller_id: self.seller_id,
            agent_number: self.agent_number.clone(),
            status,
            rejection_reason: self.rejection_reason.clone(),
            submitted_by: self.submitted_by,
            submitted_at: self.submitted_at.map(Into::into),
            published_at: self.published_at.map(Into::into),
            owner_removed: self.owner_removed,
            deleted_at: self.deleted_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(status: PropertyStatus, seller_id: Option<Uuid>) -> Model {
    let now = chrono::Utc::now().fixed_offset();
    Model {
        id: Uuid::new_v4(),
        ref_number: "PROP-2025-123456".to_string(),
        title: "Sea view apartment".to_string(),
        description: Some("Two bedrooms near the beach".to_string()),
        total_price: Some(250_000.0),
        square_meters: Some(84.5),
        zip: Some("682001".to_string()),
        place: None,
        city: Some("Kochi".to_string()),
        country: Some("India".to_string()),
        rooms: Some(3),
        bathrooms: Some(2),
        pool: false,
        parking: true,
        garden: false,
        property_type: Some("apartment".to_string()),
        amenities: serde_json::json!(["lift", "security"]),
        images: serde_json::json!(["https://cdn.example.com/a.jpg"]),
        seller_id,
        agent_number: String::new(),
        status: status.as_str().to_string(),
        rejection_reason: String::new(),
        submitted_by: seller_id,
        submitted_at: Some(now),
        published_at: None,
        owner_removed: false,
        deleted_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Entity",
        from = "Column::SellerId",
        to = "crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Sellers,
}

impl Related<crate::modules::seller::adapter::outgoing::sea_orm_entity::sellers::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::Sellers.def()
    }
}

/// Active model carrying only the columns a moderation change writes.
/// Used with `Entity::update_many().set(..)` for single and bulk updates.
pub fn moderation_model(change: &ModerationChange) -> ActiveModel {
    let mut model = <ActiveModel as Default>::default();

    model.status = Set(change.status.as_str().to_string());

    if let Some(published_at) = change.published_at {
        model.published_at = Set(Some(published_at.fixed_offset()));
    }

    if let Some(reason) = &change.rejection_reason {
        model.rejection_reason = Set(reason.clone());
    }

    if let Some(owner_removed) = change.owner_removed {
        model.owner_removed = Set(owner_removed);
    }

    if let Some(deleted_at) = change.deleted_at {
        model.deleted_at = Set(deleted_at.map(|d| d.fixed_offset()));
    }

    model
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::application::domain::moderation::ModerationAction;
    use chrono::Utc;

    #[test]
    fn approve_model_sets_publication_columns() {
        let now = Utc::now();
        let change = ModerationAction::Approve.resolve(now).unwrap();

        let model = moderation_model(&change);

        assert_eq!(model.status, Set("active".to_string()));
        assert_eq!(model.published_at, Set(Some(now.fixed_offset())));
        assert_eq!(model.rejection_reason, Set(String::new()));
        assert!(model.owner_removed.is_not_set());
        assert!(model.deleted_at.is_not_set());
    }

    #[test]
    fn to_domain_decodes_json_columns() {
        let model = sample_model(PropertyStatus::Pending, None);

        let property = model.to_domain().unwrap();

        assert_eq!(property.status, PropertyStatus::Pending);
        assert_eq!(property.amenities, vec!["lift", "security"]);
        assert_eq!(property.images.len(), 1);
    }

    #[test]
    fn to_domain_rejects_unknown_status() {
        let mut model = sample_model(PropertyStatus::Active, None);
        model.status = "sold".to_string();

        assert!(model.to_domain().is_err());
    }

    #[test]
    fn restore_model_clears_deletion() {
        let change = ModerationAction::Restore.resolve(Utc::now()).unwrap();

        let model = moderation_model(&change);

        assert_eq!(model.owner_removed, Set(false));
        assert_eq!(model.deleted_at, Set(None));
        assert!(model.published_at.is_not_set());
    }
}
