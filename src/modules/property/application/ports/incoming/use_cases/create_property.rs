use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::Property;
use crate::property::application::domain::listing::{non_blank, normalize_images};
use crate::property::application::domain::status::PropertyStatus;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreatePropertyCommand {
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
    pub agent_number: Option<String>,
    /// Seller to attach the listing to (admins only)
    pub seller_id: Option<Uuid>,
    /// Requested status (admins only, `pending` or default `active`)
    pub status: Option<PropertyStatus>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePropertyCommandError {
    #[error("Title is required")]
    MissingTitle,
}

impl CreatePropertyCommand {
    pub fn validated(mut self) -> Result<Self, CreatePropertyCommandError> {
        self.title = self.title.trim().to_string();
        if self.title.is_empty() {
            return Err(CreatePropertyCommandError::MissingTitle);
        }

        self.description = non_blank(self.description);
        self.zip = non_blank(self.zip);
        self.place = non_blank(self.place);
        self.city = non_blank(self.city);
        self.country = non_blank(self.country);
        self.property_type = non_blank(self.property_type);
        self.images = normalize_images(self.images);
        self.agent_number = self.agent_number.map(|a| a.trim().to_string());

        Ok(self)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePropertyError {
    #[error("Seller not found")]
    SellerNotFound,

    #[error("Seller account deleted")]
    SellerDeleted,

    #[error("Seller is not activated")]
    SellerInactive,

    #[error("Could not allocate a unique reference number")]
    RefNumberExhausted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePropertyUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: Actor,
        command: CreatePropertyCommand,
    ) -> Result<Property, CreatePropertyError>;
}
