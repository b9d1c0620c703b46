use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetSellerActiveError {
    #[error("Seller not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetSellerActiveUseCase: Send + Sync {
    async fn execute(
        &self,
        seller_id: Uuid,
        active: bool,
    ) -> Result<SellerProfile, SetSellerActiveError>;
}
