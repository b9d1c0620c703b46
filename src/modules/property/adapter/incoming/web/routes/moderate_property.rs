use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::property::application::domain::moderation::ModerationAction;
use crate::property::application::ports::incoming::use_cases::ModeratePropertyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RejectPropertyRequest {
    #[serde(default)]
    pub reason: String,
}

async fn moderate(
    data: &AppState,
    admin: &AdminUser,
    property_id: Uuid,
    action: ModerationAction,
) -> HttpResponse {
    let label = format!("{:?}", action);

    match data.property.moderate.execute(property_id, action).await {
        Ok(property) => {
            info!(
                admin_id = %admin.id(),
                property_id = %property_id,
                status = %property.status,
                "Property moderated"
            );
            ApiResponse::success(property)
        }

        Err(ModeratePropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(ModeratePropertyError::RejectionReasonRequired) => {
            ApiResponse::bad_request("REASON_REQUIRED", "Rejection reason is required")
        }

        Err(ModeratePropertyError::RepositoryError(e)) => {
            error!("Moderation {} of property {} failed: {}", label, property_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/properties/{id}/approve")]
pub async fn approve_property_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    moderate(&data, &admin, path.into_inner(), ModerationAction::Approve).await
}

#[put("/api/admin/properties/{id}/reject")]
pub async fn reject_property_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<RejectPropertyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let action = ModerationAction::Reject {
        reason: req.into_inner().reason,
    };
    moderate(&data, &admin, path.into_inner(), action).await
}

#[put("/api/admin/properties/{id}/soft-delete")]
pub async fn soft_delete_property_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    moderate(&data, &admin, path.into_inner(), ModerationAction::SoftDelete).await
}

#[put("/api/admin/properties/{id}/restore")]
pub async fn restore_property_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    moderate(&data, &admin, path.into_inner(), ModerationAction::Restore).await
}
