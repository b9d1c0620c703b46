use async_trait::async_trait;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::ports::incoming::use_cases::{
    ListBlogsError, ListBlogsQuery, ListBlogsUseCase,
};
use crate::blog::application::ports::outgoing::BlogQuery;

pub struct ListBlogsService<Q>
where
    Q: BlogQuery,
{
    blog_query: Q,
}

impl<Q> ListBlogsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(blog_query: Q) -> Self {
        Self { blog_query }
    }
}

#[async_trait]
impl<Q> ListBlogsUseCase for ListBlogsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, query: ListBlogsQuery) -> Result<Vec<Blog>, ListBlogsError> {
        self.blog_query
            .list(query.all, query.effective_limit())
            .await
            .map_err(|e| ListBlogsError::RepositoryError(e.to_string()))
    }
}
