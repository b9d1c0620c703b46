use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::blog::application::ports::incoming::use_cases::{
    CreateBlogCommand, CreateBlogCommandError, CreateBlogError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

#[post("/api/blogs")]
pub async fn create_blog_handler(
    _admin: AdminUser,
    req: web::Json<CreateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateBlogCommand::new(
        req.title,
        req.excerpt,
        req.content,
        req.image_url,
        req.author,
        req.published,
    ) {
        Ok(cmd) => cmd,
        Err(CreateBlogCommandError::MissingTitle) => {
            return ApiResponse::bad_request("TITLE_REQUIRED", "Title is required");
        }
    };

    match data.blog.create.execute(command).await {
        Ok(blog) => ApiResponse::created(blog),

        Err(CreateBlogError::RepositoryError(e)) => {
            error!("Failed to create blog post: {}", e);
            ApiResponse::internal_error()
        }
    }
}
