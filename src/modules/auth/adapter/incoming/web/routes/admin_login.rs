use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{
    AdminLoginCommand, AdminLoginError, AdminLoginResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin login request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AdminLoginRequestDto {
    #[schema(example = "admin@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "ChangeMe123!")]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    /// Signed access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    #[schema(example = "admin")]
    pub role: String,

    pub admin: AdminInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminInfo {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "admin@example.com")]
    pub email: String,

    #[schema(example = "Site Admin")]
    pub name: String,
}

impl From<AdminLoginResult> for AdminLoginResponse {
    fn from(result: AdminLoginResult) -> Self {
        Self {
            token: result.token,
            role: result.role.as_str().to_string(),
            admin: AdminInfo {
                id: result.admin.id.to_string(),
                email: result.admin.email,
                name: result.admin.name,
            },
        }
    }
}

/// Admin login
///
/// Exchanges admin credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = AdminLoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<AdminLoginResponse>)),
        (
            status = 400,
            description = "Missing fields or invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid credentials" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<AdminLoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match AdminLoginCommand::new(req.email, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.auth.admin_login.execute(command).await {
        Ok(result) => {
            info!(admin_id = %result.admin.id, "Admin logged in");
            ApiResponse::success(AdminLoginResponse::from(result))
        }

        Err(AdminLoginError::InvalidCredentials) => {
            warn!("Admin login rejected: invalid credentials");
            ApiResponse::bad_request("INVALID_CREDENTIALS", "Invalid credentials")
        }

        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}
