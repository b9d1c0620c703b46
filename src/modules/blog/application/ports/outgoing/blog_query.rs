use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogQuery: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, BlogQueryError>;

    /// Newest first. Drafts are included only when `include_drafts` is set.
    async fn list(&self, include_drafts: bool, limit: u64) -> Result<Vec<Blog>, BlogQueryError>;
}
