use async_trait::async_trait;
use uuid::Uuid;

use crate::blog::application::domain::entities::Blog;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct NewBlogData {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: String,
    pub published: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BlogChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: PatchField<String>,
    pub content: PatchField<String>,
    pub image_url: PatchField<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

impl BlogChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.excerpt.is_unset()
            && self.content.is_unset()
            && self.image_url.is_unset()
            && self.author.is_none()
            && self.published.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn create(&self, data: NewBlogData) -> Result<Blog, BlogRepositoryError>;

    async fn update(&self, id: Uuid, changes: BlogChanges) -> Result<Blog, BlogRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError>;
}
