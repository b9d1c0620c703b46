use async_trait::async_trait;
use chrono::Utc;

use crate::blog::application::domain::entities::Blog;
use crate::blog::application::domain::slug::slugify;
use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogError, CreateBlogUseCase,
};
use crate::blog::application::ports::outgoing::{BlogRepository, NewBlogData};

pub struct CreateBlogService<R>
where
    R: BlogRepository,
{
    blog_repository: R,
}

impl<R> CreateBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(blog_repository: R) -> Self {
        Self { blog_repository }
    }
}

#[async_trait]
impl<R> CreateBlogUseCase for CreateBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, command: CreateBlogCommand) -> Result<Blog, CreateBlogError> {
        let data = NewBlogData {
            title: command.title().to_string(),
            slug: slugify(command.title(), Utc::now()),
            excerpt: command.excerpt().map(str::to_string),
            content: command.content().map(str::to_string),
            image_url: command.image_url().map(str::to_string),
            author: command.author().to_string(),
            published: command.published(),
        };

        let blog = self
            .blog_repository
            .create(data)
            .await
            .map_err(|e| CreateBlogError::RepositoryError(e.to_string()))?;

        tracing::info!(blog_id = %blog.id, slug = %blog.slug, "Blog post created");
        Ok(blog)
    }
}
