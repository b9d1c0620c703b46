use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::{AdminUser, SellerUser};
use crate::property::application::ports::incoming::use_cases::ListSellerPropertiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

async fn respond(data: &AppState, seller_id: Uuid) -> HttpResponse {
    match data.property.list_by_seller.execute(seller_id).await {
        Ok(properties) => ApiResponse::success(properties),

        Err(ListSellerPropertiesError::RepositoryError(e)) => {
            error!("Failed to list properties of seller {}: {}", seller_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[get("/api/sellers/me/properties")]
pub async fn list_my_properties_handler(
    seller: SellerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(&data, seller.user_id).await
}

#[get("/api/admin/sellers/{id}/properties")]
pub async fn list_seller_properties_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(&data, path.into_inner()).await
}
