use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetBlogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Blog, GetBlogError>;
}
