use async_trait::async_trait;

use crate::enquiry::application::domain::entities::EnquiryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnquiryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EnquiryQuery: Send + Sync {
    /// Newest first, each with the listing it references when that still exists.
    async fn list(&self) -> Result<Vec<EnquiryView>, EnquiryQueryError>;
}
