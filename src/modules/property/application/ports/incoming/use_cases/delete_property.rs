use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::actor::Actor;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Not allowed")]
    NotOwner,

    #[error("Seller is not active or deleted")]
    SellerNotActive,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePropertyUseCase: Send + Sync {
    async fn execute(&self, actor: Actor, property_id: Uuid) -> Result<(), DeletePropertyError>;
}
