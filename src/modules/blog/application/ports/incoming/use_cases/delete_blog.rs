use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteBlogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBlogError>;
}
