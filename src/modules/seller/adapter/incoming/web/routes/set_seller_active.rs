use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::SetSellerActiveError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SetSellerActiveRequest {
    /// Missing or false deactivates
    #[serde(default)]
    pub activate: bool,
}

#[put("/api/admin/sellers/{id}/activate")]
pub async fn set_seller_active_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<SetSellerActiveRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();

    match data.seller.set_active.execute(seller_id, req.activate).await {
        Ok(profile) => {
            info!(seller_id = %seller_id, active = profile.is_active, "Seller activation changed");
            ApiResponse::success(profile)
        }

        Err(SetSellerActiveError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(SetSellerActiveError::RepositoryError(e)) => {
            error!("Failed to change activation of seller {}: {}", seller_id, e);
            ApiResponse::internal_error()
        }
    }
}
