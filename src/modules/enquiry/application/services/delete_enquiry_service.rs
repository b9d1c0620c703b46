use async_trait::async_trait;
use uuid::Uuid;

use crate::enquiry::application::ports::incoming::use_cases::{
    DeleteEnquiryError, DeleteEnquiryUseCase,
};
use crate::enquiry::application::ports::outgoing::{EnquiryRepository, EnquiryRepositoryError};

pub struct DeleteEnquiryService<R>
where
    R: EnquiryRepository,
{
    enquiry_repository: R,
}

impl<R> DeleteEnquiryService<R>
where
    R: EnquiryRepository,
{
    pub fn new(enquiry_repository: R) -> Self {
        Self { enquiry_repository }
    }
}

#[async_trait]
impl<R> DeleteEnquiryUseCase for DeleteEnquiryService<R>
where
    R: EnquiryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteEnquiryError> {
        self.enquiry_repository.delete(id).await.map_err(|e| match e {
            EnquiryRepositoryError::NotFound => DeleteEnquiryError::NotFound,
            other => DeleteEnquiryError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(enquiry_id = %id, "Enquiry deleted");
        Ok(())
    }
}
