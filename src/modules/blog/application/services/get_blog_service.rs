use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::incoming::use_cases::{GetBlogError, GetBlogUseCase};
use crate::blog::application::ports::outgoing::BlogQuery;

pub struct GetBlogService<Q>
where
    Q: BlogQuery,
{
    blog_query: Q,
}

impl<Q> GetBlogService<Q>
where
    Q: BlogQuery,
{
    pub fn new(blog_query: Q) -> Self {
        Self { blog_query }
    }
}

#[async_trait]
impl<Q> GetBlogUseCase for GetBlogService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Blog, GetBlogError> {
        self.blog_query
            .find_by_id(id)
            .await
            .map_err(|e| GetBlogError::RepositoryError(e.to_string()))?
            .ok_or(GetBlogError::NotFound)
    }
}
