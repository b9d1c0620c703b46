use actix_web::{delete, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::{DeleteMode, DeleteSellerError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DeleteSellerParams {
    #[serde(default)]
    pub hard: bool,
}

/// Soft delete by default; `?hard=true` removes the seller and their listings.
#[delete("/api/admin/sellers/{id}")]
pub async fn delete_seller_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    params: web::Query<DeleteSellerParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();
    let mode = if params.hard {
        DeleteMode::Hard
    } else {
        DeleteMode::Soft
    };

    match data.seller.delete.execute(seller_id, mode).await {
        Ok(outcome) => {
            tracing::info!(admin_id = %admin.id(), seller_id = %seller_id, "Seller delete requested by admin");
            ApiResponse::success(outcome)
        }

        Err(DeleteSellerError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(DeleteSellerError::RepositoryError(e)) => {
            error!("Failed to delete seller {}: {}", seller_id, e);
            ApiResponse::internal_error()
        }
    }
}
