use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::enquiry::application::ports::incoming::use_cases::ListEnquiriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/enquiry")]
pub async fn list_enquiries_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.enquiry.list.execute().await {
        Ok(enquiries) => ApiResponse::success(enquiries),

        Err(ListEnquiriesError::RepositoryError(e)) => {
            error!("Failed to list enquiries: {}", e);
            ApiResponse::internal_error()
        }
    }
}
