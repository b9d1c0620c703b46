use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::enquiry::application::ports::incoming::use_cases::{
    SubmitEnquiryCommand, SubmitEnquiryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SubmitEnquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub property_id: Option<Uuid>,
    pub property_title: Option<String>,
    pub property_ref: Option<String>,
}

#[post("/api/enquiry")]
pub async fn submit_enquiry_handler(
    req: web::Json<SubmitEnquiryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match SubmitEnquiryCommand::new(
        req.name,
        req.email,
        req.message,
        req.phone,
        req.property_id,
        req.property_title,
        req.property_ref,
    ) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("MISSING_FIELDS", &e.to_string()),
    };

    match data.enquiry.submit.execute(command).await {
        Ok(receipt) => ApiResponse::success(receipt),

        Err(SubmitEnquiryError::RepositoryError(e)) => {
            error!("Failed to save enquiry: {}", e);
            ApiResponse::internal_error()
        }
    }
}
