use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreSellerError {
    #[error("Seller not found")]
    NotFound,

    #[error("Seller is not deleted")]
    NotDeleted,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RestoreSellerUseCase: Send + Sync {
    async fn execute(&self, seller_id: Uuid) -> Result<SellerProfile, RestoreSellerError>;
}
