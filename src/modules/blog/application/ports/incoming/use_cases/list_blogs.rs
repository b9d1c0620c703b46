use async_trait::async_trait;

use crate::blog::application::domain::entities::Blog;

pub const DEFAULT_BLOG_LIMIT: u64 = 20;
pub const MAX_BLOG_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListBlogsQuery {
    /// Include unpublished drafts
    pub all: bool,
    pub limit: Option<u64>,
}

impl ListBlogsQuery {
    /// Requested limit clamped to `1..=100`, 20 when absent.
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_BLOG_LIMIT)
            .clamp(1, MAX_BLOG_LIMIT)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBlogsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListBlogsUseCase: Send + Sync {
    async fn execute(&self, query: ListBlogsQuery) -> Result<Vec<Blog>, ListBlogsError>;
}
