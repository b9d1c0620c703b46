use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::blog::application::ports::incoming::use_cases::DeleteBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/blogs/{id}")]
pub async fn delete_blog_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.delete.execute(blog_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteBlogError::NotFound) => {
            ApiResponse::not_found("BLOG_NOT_FOUND", "Blog not found")
        }

        Err(DeleteBlogError::RepositoryError(e)) => {
            error!("Repository error deleting blog {}: {}", blog_id, e);
            ApiResponse::internal_error()
        }
    }
}
