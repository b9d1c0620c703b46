use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::GetSellerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/sellers/{id}")]
pub async fn get_seller_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();

    match data.seller.get.execute(seller_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetSellerError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(GetSellerError::RepositoryError(e)) => {
            error!("Failed to load seller {}: {}", seller_id, e);
            ApiResponse::internal_error()
        }
    }
}
