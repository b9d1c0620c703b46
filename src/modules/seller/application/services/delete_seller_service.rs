use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::ports::incoming::use_cases::{
    DeleteMode, DeleteSellerError, DeleteSellerOutcome, DeleteSellerUseCase,
};
use crate::seller::application::ports::outgoing::{SellerRepository, SellerRepositoryError};

pub struct DeleteSellerService<R>
where
    R: SellerRepository,
{
    seller_repository: R,
}

impl<R> DeleteSellerService<R>
where
    R: SellerRepository,
{
    pub fn new(seller_repository: R) -> Self {
        Self { seller_repository }
    }
}

#[async_trait]
impl<R> DeleteSellerUseCase for DeleteSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(
        &self,
        seller_id: Uuid,
        mode: DeleteMode,
    ) -> Result<DeleteSellerOutcome, DeleteSellerError> {
        let result = match mode {
            DeleteMode::Soft => self.seller_repository.soft_delete(seller_id).await,
            DeleteMode::Hard => self.seller_repository.hard_delete(seller_id).await,
        };

        let properties_affected = result.map_err(|e| match e {
            SellerRepositoryError::NotFound => DeleteSellerError::NotFound,
            other => DeleteSellerError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(
            seller_id = %seller_id,
            hard = mode == DeleteMode::Hard,
            properties_affected,
            "Seller deleted"
        );

        Ok(DeleteSellerOutcome {
            id: seller_id,
            hard: mode == DeleteMode::Hard,
            properties_affected,
        })
    }
}
