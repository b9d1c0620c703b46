use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::{
    UpdateSellerCommand, UpdateSellerError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateSellerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,

    #[serde(default)]
    pub company: PatchField<String>,

    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateSellerRequest> for UpdateSellerCommand {
    fn from(req: UpdateSellerRequest) -> Self {
        UpdateSellerCommand {
            name: req.name,
            email: req.email,
            password: req.password,
            company: req.company,
            phone: req.phone,
            city: req.city,
            pincode: req.pincode,
            is_active: req.is_active,
        }
    }
}

#[put("/api/admin/sellers/{id}")]
pub async fn update_seller_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateSellerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();

    let command = match UpdateSellerCommand::from(req.into_inner()).validated() {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.seller.update.execute(seller_id, command).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(UpdateSellerError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(UpdateSellerError::EmailAlreadyRegistered) => {
            ApiResponse::bad_request("EMAIL_TAKEN", "Email already registered")
        }

        Err(e) => {
            error!("Failed to update seller {}: {}", seller_id, e);
            ApiResponse::internal_error()
        }
    }
}
