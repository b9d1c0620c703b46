use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::blog::application::ports::incoming::use_cases::GetBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/blogs/{id}")]
pub async fn get_blog_handler(path: web::Path<Uuid>, data: web::Data<AppState>) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.get.execute(blog_id).await {
        Ok(blog) => ApiResponse::success(blog),

        Err(GetBlogError::NotFound) => ApiResponse::not_found("BLOG_NOT_FOUND", "Blog not found"),

        Err(GetBlogError::RepositoryError(e)) => {
            error!("Repository error fetching blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}
