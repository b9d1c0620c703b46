use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::{
    CreateSellerCommand, CreateSellerCommandError, CreateSellerError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CreateSellerRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub is_active: Option<bool>,
}

#[post("/api/admin/sellers")]
pub async fn create_seller_handler(
    admin: AdminUser,
    req: web::Json<CreateSellerRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let command = match CreateSellerCommand::new(
        req.name,
        req.email,
        req.password,
        req.company,
        req.phone,
        req.city,
        req.pincode,
        req.is_active,
    ) {
        Ok(cmd) => cmd,
        Err(e @ CreateSellerCommandError::MissingFields) => {
            return ApiResponse::bad_request("MISSING_FIELDS", &e.to_string());
        }
        Err(e @ CreateSellerCommandError::InvalidEmail) => {
            return ApiResponse::bad_request("INVALID_EMAIL", &e.to_string());
        }
    };

    match data.seller.create.execute(command).await {
        Ok(profile) => {
            info!(admin_id = %admin.id(), seller_id = %profile.id, "Seller created by admin");
            ApiResponse::created(profile)
        }

        Err(CreateSellerError::EmailAlreadyRegistered) => {
            ApiResponse::bad_request("EMAIL_TAKEN", "Email already registered")
        }

        Err(e) => {
            error!("Admin seller creation failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use crate::auth::application::domain::entities::Role;
    use crate::seller::application::domain::entities::{sample_seller, SellerProfile};
    use crate::seller::application::ports::incoming::use_cases::CreateSellerUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};

    #[derive(Clone)]
    struct MockCreateSellerUseCase {
        result: Result<SellerProfile, CreateSellerError>,
    }

    #[async_trait]
    impl CreateSellerUseCase for MockCreateSellerUseCase {
        async fn execute(
            &self,
            _command: CreateSellerCommand,
        ) -> Result<SellerProfile, CreateSellerError> {
            self.result.clone()
        }
    }

    async fn create(
        body: Value,
        result: Result<SellerProfile, CreateSellerError>,
    ) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_seller(MockCreateSellerUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(create_seller_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sellers")
            .insert_header(bearer(Uuid::new_v4(), Role::Admin))
            .set_json(&body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_seller_success() {
        let (status, body) = create(
            json!({ "name": "Priya", "email": "priya@example.com", "password": "pw" }),
            Ok(sample_seller(true, false).to_profile()),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["is_active"], true);
    }

    #[actix_web::test]
    async fn test_create_seller_invalid_email() {
        let (status, body) = create(
            json!({ "name": "Priya", "email": "nope", "password": "pw" }),
            Ok(sample_seller(true, false).to_profile()),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");
    }

    #[actix_web::test]
    async fn test_create_seller_email_taken() {
        let (status, body) = create(
            json!({ "name": "Priya", "email": "priya@example.com", "password": "pw" }),
            Err(CreateSellerError::EmailAlreadyRegistered),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "EMAIL_TAKEN");
    }
}
