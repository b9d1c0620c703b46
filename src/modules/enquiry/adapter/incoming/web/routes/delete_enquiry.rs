use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::enquiry::application::ports::incoming::use_cases::DeleteEnquiryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/enquiry/{id}")]
pub async fn delete_enquiry_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let enquiry_id = path.into_inner();

    match data.enquiry.delete.execute(enquiry_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteEnquiryError::NotFound) => {
            ApiResponse::not_found("ENQUIRY_NOT_FOUND", "Enquiry not found")
        }

        Err(DeleteEnquiryError::RepositoryError(e)) => {
            error!("Repository error deleting enquiry {}: {}", enquiry_id, e);
            ApiResponse::internal_error()
        }
    }
}
