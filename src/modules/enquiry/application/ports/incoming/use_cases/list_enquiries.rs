use async_trait::async_trait;

use crate::enquiry::application::domain::entities::EnquiryView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEnquiriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListEnquiriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EnquiryView>, ListEnquiriesError>;
}
