use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone, Default)]
pub struct UpdateBlogCommand {
    pub title: Option<String>,
    pub excerpt: PatchField<String>,
    pub content: PatchField<String>,
    pub image_url: PatchField<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateBlogCommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,
}

impl UpdateBlogCommand {
    pub fn validated(mut self) -> Result<Self, UpdateBlogCommandError> {
        if let Some(title) = self.title.as_mut() {
            *title = title.trim().to_string();
            if title.is_empty() {
                return Err(UpdateBlogCommandError::EmptyTitle);
            }
        }

        // A blank author keeps the stored one
        self.author = self
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Ok(self)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateBlogError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateBlogUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, command: UpdateBlogCommand) -> Result<Blog, UpdateBlogError>;
}
