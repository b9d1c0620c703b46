use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::property::application::domain::moderation::SellerCascade;

#[derive(Debug, Clone, Serialize)]
pub struct CascadeOutcome {
    pub seller_id: Uuid,
    pub properties_affected: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CascadeSellerPropertiesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CascadeSellerPropertiesUseCase: Send + Sync {
    async fn execute(
        &self,
        seller_id: Uuid,
        cascade: SellerCascade,
    ) -> Result<CascadeOutcome, CascadeSellerPropertiesError>;
}
