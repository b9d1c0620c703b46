use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::property::application::domain::moderation::SellerCascade;
use crate::property::application::ports::incoming::use_cases::CascadeSellerPropertiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn cascade(data: &AppState, seller_id: Uuid, kind: SellerCascade) -> HttpResponse {
    match data.property.cascade.execute(seller_id, kind).await {
        Ok(outcome) => {
            info!(
                seller_id = %seller_id,
                cascade = ?kind,
                properties_affected = outcome.properties_affected,
                "Seller listings cascaded"
            );
            ApiResponse::success(outcome)
        }

        Err(CascadeSellerPropertiesError::RepositoryError(e)) => {
            error!("Cascade {:?} for seller {} failed: {}", kind, seller_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/sellers/{id}/properties/soft-delete-all")]
pub async fn soft_delete_all_seller_properties_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    cascade(&data, path.into_inner(), SellerCascade::SoftDeleteAll).await
}

#[put("/api/admin/sellers/{id}/properties/restore-all")]
pub async fn restore_all_seller_properties_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    cascade(&data, path.into_inner(), SellerCascade::RestoreAll).await
}
