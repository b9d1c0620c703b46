use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::blog::application::ports::incoming::use_cases::{ListBlogsError, ListBlogsQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListBlogsParams {
    /// `true` includes drafts
    #[serde(default)]
    pub all: bool,
    pub limit: Option<u64>,
}

impl From<ListBlogsParams> for ListBlogsQuery {
    fn from(params: ListBlogsParams) -> Self {
        ListBlogsQuery {
            all: params.all,
            limit: params.limit,
        }
    }
}

#[get("/api/blogs")]
pub async fn list_blogs_handler(
    query: web::Query<ListBlogsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.list.execute(query.into_inner().into()).await {
        Ok(blogs) => ApiResponse::success(blogs),

        Err(ListBlogsError::RepositoryError(e)) => {
            error!("Failed to list blog posts: {}", e);
            ApiResponse::internal_error()
        }
    }
}
