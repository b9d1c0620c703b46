use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::{ModerationChange, SellerCascade};
use crate::property::application::domain::status::PropertyStatus;
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// Write DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewPropertyData {
    pub ref_number: String,
    pub title: String,
    pub description: Option<String>,
    pub total_price: Option<f64>,
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
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub seller_id: Option<Uuid>,
    pub agent_number: String,
    pub status: PropertyStatus,
    pub submitted_by: Option<Uuid>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update of a listing. `None`/`Unset` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub description: PatchField<String>,
    pub total_price: PatchField<f64>,
    pub square_meters: PatchField<f64>,
    pub zip: PatchField<String>,
    pub place: PatchField<String>,
    pub city: PatchField<String>,
    pub country: PatchField<String>,
    pub rooms: PatchField<i32>,
    pub bathrooms: PatchField<i32>,
    pub pool: Option<bool>,
    pub parking: Option<bool>,
    pub garden: Option<bool>,
    pub property_type: PatchField<String>,
    pub amenities: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub seller_id: PatchField<Uuid>,
    pub agent_number: Option<String>,
    pub status: Option<PropertyStatus>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl PropertyChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_unset()
            && self.total_price.is_unset()
            && self.square_meters.is_unset()
            && self.zip.is_unset()
            && self.place.is_unset()
            && self.city.is_unset()
            && self.country.is_unset()
            && self.rooms.is_unset()
            && self.bathrooms.is_unset()
            && self.pool.is_none()
            && self.parking.is_none()
            && self.garden.is_none()
            && self.property_type.is_unset()
            && self.amenities.is_none()
            && self.images.is_none()
            && self.seller_id.is_unset()
            && self.agent_number.is_none()
            && self.status.is_none()
            && self.rejection_reason.is_none()
            && self.published_at.is_none()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PropertyRepositoryError {
    #[error("Property not found")]
    NotFound,

    #[error("Reference number already taken")]
    RefNumberTaken,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (write side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, data: NewPropertyData) -> Result<Property, PropertyRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: PropertyChanges,
    ) -> Result<Property, PropertyRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), PropertyRepositoryError>;

    /// Writes a resolved moderation change as a single UPDATE ... RETURNING.
    async fn apply_moderation(
        &self,
        id: Uuid,
        change: &ModerationChange,
    ) -> Result<Property, PropertyRepositoryError>;

    /// Bulk moderation over one seller's listings. Returns rows touched.
    async fn apply_seller_cascade(
        &self,
        seller_id: Uuid,
        cascade: SellerCascade,
    ) -> Result<u64, PropertyRepositoryError>;
}
