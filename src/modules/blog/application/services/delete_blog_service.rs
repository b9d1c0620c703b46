use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::ports::incoming::use_cases::{DeleteBlogError, DeleteBlogUseCase};
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};

pub struct DeleteBlogService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> DeleteBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<R> DeleteBlogUseCase for DeleteBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBlogError> {
        self.blog_repository.delete(id).await.map_err(|e| match e {
            BlogRepositoryError::NotFound => DeleteBlogError::NotFound,
            other => DeleteBlogError::RepositoryError(other.to_string()),
        })
    }
}
