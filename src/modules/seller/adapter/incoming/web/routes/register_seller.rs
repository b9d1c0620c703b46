use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    RegisterSellerCommand, RegisterSellerCommandError, RegisterSellerError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seller self-registration
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct RegisterSellerRequest {
    #[schema(example = "Priya Nair")]
    #[serde(default)]
    pub name: String,

    #[schema(example = "priya@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    #[serde(default)]
    pub password: String,

    #[schema(example = "SecurePass123!")]
    #[serde(default)]
    pub confirm_password: String,

    #[schema(example = "Nair Estates")]
    pub company: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

/// Seller profile as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct SellerProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    /// Newly registered sellers wait for admin activation
    #[schema(example = false)]
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SellerProfile> for SellerProfileResponse {
    fn from(p: SellerProfile) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            email: p.email,
            company: p.company,
            phone: p.phone,
            city: p.city,
            pincode: p.pincode,
            is_active: p.is_active,
            is_deleted: p.is_deleted,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Register seller
///
/// Creates an inactive seller account. An admin has to activate it before
/// the seller can submit listings.
#[utoipa::path(
    post,
    path = "/api/sellers/register",
    tag = "sellers",
    request_body = RegisterSellerRequest,
    responses(
        (status = 201, description = "Seller registered", body = inline(SuccessResponse<SellerProfileResponse>)),
        (
            status = 400,
            description = "Validation failed or email taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_TAKEN", "message": "Email already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/sellers/register")]
pub async fn register_seller_handler(
    req: web::Json<RegisterSellerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match RegisterSellerCommand::new(
        req.name,
        req.email,
        req.password,
        req.confirm_password,
        req.company,
        req.phone,
        req.city,
        req.pincode,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            let code = match e {
                RegisterSellerCommandError::MissingFields => "MISSING_FIELDS",
                RegisterSellerCommandError::PasswordMismatch => "PASSWORD_MISMATCH",
                RegisterSellerCommandError::InvalidEmail => "INVALID_EMAIL",
            };
            return ApiResponse::bad_request(code, &e.to_string());
        }
    };

    match data.seller.register.execute(command).await {
        Ok(profile) => {
            info!(seller_id = %profile.id, "Seller registered");
            ApiResponse::created(SellerProfileResponse::from(profile))
        }

        Err(RegisterSellerError::EmailAlreadyRegistered) => {
            ApiResponse::bad_request("EMAIL_TAKEN", "Email already registered")
        }

        Err(e) => {
            error!("Seller registration failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
