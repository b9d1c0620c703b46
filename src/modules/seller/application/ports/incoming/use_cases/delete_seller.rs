use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Flag the seller deleted and cascade to their listings
    Soft,
    /// Remove the seller row and every listing they own
    Hard,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSellerOutcome {
    pub id: Uuid,
    pub hard: bool,
    pub properties_affected: u64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSellerError {
    #[error("Seller not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSellerUseCase: Send + Sync {
    async fn execute(
        &self,
        seller_id: Uuid,
        mode: DeleteMode,
    ) -> Result<DeleteSellerOutcome, DeleteSellerError>;
}
