use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::property::application::ports::incoming::use_cases::ListPendingPropertiesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/properties/pending")]
pub async fn list_pending_properties_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.list_pending.execute().await {
        Ok(properties) => ApiResponse::success(properties),

        Err(ListPendingPropertiesError::RepositoryError(e)) => {
            error!("Failed to list pending properties: {}", e);
            ApiResponse::internal_error()
        }
    }
}
