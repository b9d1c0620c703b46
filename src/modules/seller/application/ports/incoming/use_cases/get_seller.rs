use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSellerError {
    #[error("Seller not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSellerUseCase: Send + Sync {
    async fn execute(&self, seller_id: Uuid) -> Result<SellerProfile, GetSellerError>;
}
