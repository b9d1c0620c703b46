use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::status::PropertyStatus;

#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub id: Uuid,
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
    pub rejection_reason: String,
    pub submitted_by: Option<Uuid>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub owner_removed: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    pub fn is_owned_by(&self, seller_id: Uuid) -> bool {
        self.seller_id == Some(seller_id)
    }
}

/// Seller fields embedded in listing responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyView {
    #[serde(flatten)]
    pub property: Property,
    pub seller: Option<SellerSummary>,
}
