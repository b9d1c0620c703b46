use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::Seller;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the sellers table, shared with the auth and property modules.
#[async_trait]
pub trait SellerQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Seller>, SellerQueryError>;

    /// Newest first. `deleted` selects soft-deleted sellers instead of live ones.
    async fn list(&self, deleted: bool) -> Result<Vec<Seller>, SellerQueryError>;
}
