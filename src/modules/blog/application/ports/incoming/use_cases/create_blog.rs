use async_trait::async_trait;

use crate::blog::application::domain::entities::{Blog, DEFAULT_AUTHOR};

#[derive(Debug, Clone)]
pub struct CreateBlogCommand {
    title: String,
    excerpt: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    author: String,
    published: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateBlogCommandError {
    #[error("Title is required")]
    MissingTitle,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CreateBlogCommand {
    pub fn new(
        title: String,
        excerpt: Option<String>,
        content: Option<String>,
        image_url: Option<String>,
        author: Option<String>,
        published: Option<bool>,
    ) -> Result<Self, CreateBlogCommandError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CreateBlogCommandError::MissingTitle);
        }

        Ok(Self {
            title,
            excerpt: non_blank(excerpt),
            content,
            image_url: non_blank(image_url),
            author: non_blank(author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            published: published.unwrap_or(true),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn published(&self) -> bool {
        self.published
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateBlogError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBlogUseCase: Send + Sync {
    async fn execute(&self, command: CreateBlogCommand) -> Result<Blog, CreateBlogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_author_and_published() {
        let cmd = CreateBlogCommand::new("Market update".into(), None, None, None, Some(" ".into()), None)
            .unwrap();

        assert_eq!(cmd.author(), "Admin");
        assert!(cmd.published());
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = CreateBlogCommand::new("  ".into(), None, None, None, None, None);
        assert_eq!(result.unwrap_err(), CreateBlogCommandError::MissingTitle);
    }
}
