use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::register_seller::SellerProfileResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::seller::application::ports::incoming::use_cases::{
    SellerLoginCommand, SellerLoginError, SellerLoginResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SellerLoginRequest {
    #[schema(example = "priya@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SellerLoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    #[schema(example = "seller")]
    pub role: String,

    /// Inactive sellers may log in but cannot submit listings
    pub is_active: bool,

    pub seller: SellerProfileResponse,
}

impl From<SellerLoginResult> for SellerLoginResponse {
    fn from(result: SellerLoginResult) -> Self {
        Self {
            token: result.token,
            role: result.role.as_str().to_string(),
            is_active: result.is_active,
            seller: result.seller.into(),
        }
    }
}

/// Seller login
#[utoipa::path(
    post,
    path = "/api/sellers/login",
    tag = "sellers",
    request_body = SellerLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<SellerLoginResponse>)),
        (status = 400, description = "Invalid credentials", body = ErrorResponse),
        (
            status = 403,
            description = "Seller account deleted",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SELLER_DELETED", "message": "Seller account deleted" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/sellers/login")]
pub async fn seller_login_handler(
    req: web::Json<SellerLoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match SellerLoginCommand::new(req.email, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("MISSING_FIELDS", &e.to_string()),
    };

    match data.seller.login.execute(command).await {
        Ok(result) => {
            info!(seller_id = %result.seller.id, "Seller logged in");
            ApiResponse::success(SellerLoginResponse::from(result))
        }

        Err(SellerLoginError::InvalidCredentials) => {
            ApiResponse::bad_request("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(SellerLoginError::AccountDeleted) => {
            warn!("Login attempt on deleted seller account");
            ApiResponse::forbidden("SELLER_DELETED", "Seller account deleted")
        }

        Err(e) => {
            error!("Seller login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
