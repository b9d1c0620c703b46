use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::blog::application::ports::incoming::use_cases::{
    UpdateBlogCommand, UpdateBlogCommandError, UpdateBlogError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,

    #[serde(default)]
    pub excerpt: PatchField<String>,

    #[serde(default)]
    pub content: PatchField<String>,

    #[serde(default)]
    pub image_url: PatchField<String>,

    pub author: Option<String>,
    pub published: Option<bool>,
}

impl From<UpdateBlogRequest> for UpdateBlogCommand {
    fn from(req: UpdateBlogRequest) -> Self {
        UpdateBlogCommand {
            title: req.title,
            excerpt: req.excerpt,
            content: req.content,
            image_url: req.image_url,
            author: req.author,
            published: req.published,
        }
    }
}

#[put("/api/blogs/{id}")]
pub async fn update_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateBlogRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    let command = match UpdateBlogCommand::from(req.into_inner()).validated() {
        Ok(cmd) => cmd,
        Err(UpdateBlogCommandError::EmptyTitle) => {
            return ApiResponse::bad_request("TITLE_REQUIRED", "Title cannot be empty");
        }
    };

    match data.blog.update.execute(blog_id, command).await {
        Ok(blog) => ApiResponse::success(blog),

        Err(UpdateBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog not found")
        }

        Err(UpdateBlogError::RepositoryError(e)) => {
            error!("Repository error updating blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}
