use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::{Property, PropertyView};
use crate::property::application::domain::status::PropertyStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyListFilter {
    pub status: PropertyStatus,
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type: Option<String>,
    pub max_price: Option<f64>,
    pub min_rooms: Option<i32>,
}

impl Default for PropertyListFilter {
    fn default() -> Self {
        Self {
            status: PropertyStatus::Active,
            city: None,
            country: None,
            property_type: None,
            max_price: None,
            min_rooms: None,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum PropertyQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read side of listings. Views embed a seller summary when one is linked.
#[async_trait]
pub trait PropertyQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, PropertyQueryError>;

    async fn find_view(&self, id: Uuid) -> Result<Option<PropertyView>, PropertyQueryError>;

    /// Newest first
    async fn list(&self, filter: PropertyListFilter)
        -> Result<Vec<PropertyView>, PropertyQueryError>;

    /// Every listing of one seller regardless of status, newest first
    async fn list_by_seller(&self, seller_id: Uuid) -> Result<Vec<Property>, PropertyQueryError>;

    /// Pending listings, most recent submission first
    async fn list_pending(&self) -> Result<Vec<PropertyView>, PropertyQueryError>;

    /// `(city, zip)` pairs whose city or zip contains `search`, case-insensitive
    async fn location_rows(
        &self,
        search: &str,
        limit: u64,
    ) -> Result<Vec<(Option<String>, Option<String>)>, PropertyQueryError>;
}
