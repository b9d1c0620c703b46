use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::Property;
use crate::property::application::domain::listing::normalize_images;
use crate::property::application::domain::status::PropertyStatus;
use crate::shared::patch::PatchField;

/// Partial update: `Unset` keeps, `Null` clears, `Value` sets.
/// `status` and `rejection_reason` only apply when an admin is acting.
#[derive(Debug, Clone, Default)]
pub struct UpdatePropertyCommand {
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
    pub agent_number: Option<String>,
    pub seller_id: PatchField<Uuid>,
    pub status: Option<PropertyStatus>,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePropertyCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,
}

fn trim_patch(field: PatchField<String>) -> PatchField<String> {
    match field.map(|v| v.trim().to_string()) {
        PatchField::Value(v) if v.is_empty() => PatchField::Null,
        other => other,
    }
}

impl UpdatePropertyCommand {
    pub fn validated(mut self) -> Result<Self, UpdatePropertyCommandError> {
        if let Some(title) = self.title.as_mut() {
            *title = title.trim().to_string();
            if title.is_empty() {
                return Err(UpdatePropertyCommandError::EmptyTitle);
            }
        }

        self.description = trim_patch(self.description);
        self.zip = trim_patch(self.zip);
        self.place = trim_patch(self.place);
        self.city = trim_patch(self.city);
        self.country = trim_patch(self.country);
        self.property_type = trim_patch(self.property_type);
        self.agent_number = self.agent_number.map(|a| a.trim().to_string());

        // An empty image list keeps the stored images
        self.images = self
            .images
            .map(normalize_images)
            .filter(|images| !images.is_empty());

        Ok(self)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Not allowed")]
    NotOwner,

    #[error("Seller is not active or deleted")]
    SellerNotActive,

    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePropertyUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        property_id: Uuid,
        command: UpdatePropertyCommand,
    ) -> Result<Property, UpdatePropertyError>;
}
