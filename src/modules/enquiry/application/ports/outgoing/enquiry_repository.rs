use async_trait::async_trait;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::Enquiry;

#[derive(Debug, Clone)]
pub struct NewEnquiryData {
    pub ref_number: String,
    pub property_id: Option<Uuid>,
    pub property_ref: Option<String>,
    pub property_title: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnquiryRepositoryError {
    #[error("Enquiry not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    async fn create(&self, data: NewEnquiryData) -> Result<Enquiry, EnquiryRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), EnquiryRepositoryError>;
}
