use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::ports::incoming::use_cases::{
    CurrentAccount, GetCurrentAccountError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentAccountResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "seller")]
    pub role: String,

    #[schema(example = "Priya Nair")]
    pub name: String,

    #[schema(example = "priya@example.com")]
    pub email: String,

    /// Present for sellers only
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub is_active: Option<bool>,
}

impl From<CurrentAccount> for CurrentAccountResponse {
    fn from(account: CurrentAccount) -> Self {
        Self {
            id: account.id.to_string(),
            role: account.role.as_str().to_string(),
            name: account.name,
            email: account.email,
            is_active: account.is_active,
        }
    }
}

/// Current account
///
/// Resolves the bearer token to the admin or seller it was issued for.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Account found", body = inline(SuccessResponse<CurrentAccountResponse>)),
        (
            status = 401,
            description = "Token invalid or account gone",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ACCOUNT_NOT_FOUND", "message": "Account not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[get("/api/auth/me")]
pub async fn get_current_account_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .auth
        .current_account
        .execute(user.user_id, user.role)
        .await
    {
        Ok(account) => ApiResponse::success(CurrentAccountResponse::from(account)),

        Err(GetCurrentAccountError::AccountNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account not found")
        }

        Err(GetCurrentAccountError::RepositoryError(e)) => {
            error!("Failed to resolve account {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
