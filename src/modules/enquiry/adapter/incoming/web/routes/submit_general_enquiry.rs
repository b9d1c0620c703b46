use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::enquiry::application::ports::incoming::use_cases::{
    GeneralEnquiryCommand, SubmitEnquiryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralEnquiryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub wish: Option<String>,
    pub meeting: Option<String>,
}

#[post("/api/enquiry/general")]
pub async fn submit_general_enquiry_handler(
    req: web::Json<GeneralEnquiryRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command =
        match GeneralEnquiryCommand::new(req.name, req.email, req.message, req.wish, req.meeting) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("MISSING_FIELDS", &e.to_string()),
        };

    match data.enquiry.submit_general.execute(command).await {
        Ok(receipt) => ApiResponse::success(receipt),

        Err(SubmitEnquiryError::RepositoryError(e)) => {
            error!("Failed to save general enquiry: {}", e);
            ApiResponse::internal_error()
        }
    }
}
