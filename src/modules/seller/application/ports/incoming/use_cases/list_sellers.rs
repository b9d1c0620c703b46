use async_trait::async_trait;

use crate::seller::application::domain::entities::SellerProfile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSellersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSellersUseCase: Send + Sync {
    /// Live sellers, or soft-deleted ones when `deleted` is set
    async fn execute(&self, deleted: bool) -> Result<Vec<SellerProfile>, ListSellersError>;
}
