use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    AdminInfo, AdminLoginRequestDto, AdminLoginResponse, CurrentAccountResponse,
};

// Sellers
use crate::seller::adapter::incoming::web::routes::{
    RegisterSellerRequest, SellerLoginRequest, SellerLoginResponse, SellerProfileResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estate Marketplace API",
        version = "1.0.0",
        description = "API documentation for the real-estate marketplace backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::admin_login_handler,
        crate::auth::adapter::incoming::web::routes::get_current_account_handler,

        // Seller endpoints
        crate::seller::adapter::incoming::web::routes::register_seller_handler,
        crate::seller::adapter::incoming::web::routes::seller_login_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<AdminLoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            AdminLoginRequestDto,
            AdminLoginResponse,
            AdminInfo,
            CurrentAccountResponse,

            // Seller DTOs
            RegisterSellerRequest,
            SellerProfileResponse,
            SellerLoginRequest,
            SellerLoginResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin login and token introspection"),
        (name = "sellers", description = "Seller registration and login"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin or seller access token"))
                        .build(),
                ),
            )
        }
    }
}
