use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::domain::slug::slugify;
use crate::blog::application::ports::incoming::use_cases::{
    UpdateBlogCommand, UpdateBlogError, UpdateBlogUseCase,
};
use crate::blog::application::ports::outgoing::{
    BlogChanges, BlogQuery, BlogRepository, BlogRepositoryError,
};

pub struct UpdateBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    blog_repository: R,
    blog_query: Q,
}

impl<R, Q> UpdateBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    pub fn new(blog_repository: R, blog_query: Q) -> Self {
        Self {
            blog_repository,
            blog_query,
        }
    }
}

#[async_trait]
impl<R, Q> UpdateBlogUseCase for UpdateBlogService<R, Q>
where
    R: BlogRepository + Send + Sync,
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid, command: UpdateBlogCommand) -> Result<Blog, UpdateBlogError> {
        let changes = BlogChanges {
            slug: command.title.as_deref().map(|t| slugify(t, Utc::now())),
            title: command.title,
            excerpt: command.excerpt,
            content: command.content,
            image_url: command.image_url,
            author: command.author,
            published: command.published,
        };

        if changes.is_empty() {
            return self
                .blog_query
                .find_by_id(id)
                .await
                .map_err(|e| UpdateBlogError::RepositoryError(e.to_string()))?
                .ok_or(UpdateBlogError::NotFound);
        }

        self.blog_repository
            .update(id, changes)
            .await
            .map_err(|e| match e {
                BlogRepositoryError::NotFound => UpdateBlogError::NotFound,
                other => UpdateBlogError::RepositoryError(other.to_string()),
            })
    }
}
