use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::ListSellersError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn respond(data: &AppState, deleted: bool) -> actix_web::HttpResponse {
    match data.seller.list.execute(deleted).await {
        Ok(sellers) => ApiResponse::success(sellers),

        Err(ListSellersError::RepositoryError(e)) => {
            error!("Failed to list sellers (deleted = {}): {}", deleted, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/admin/sellers")]
pub async fn list_sellers_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    respond(&data, false).await
}

/// Must be registered before `/api/admin/sellers/{id}`.
#[get("/api/admin/sellers/deleted")]
pub async fn list_deleted_sellers_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(&data, true).await
}
