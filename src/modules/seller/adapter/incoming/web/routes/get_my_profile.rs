use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::SellerUser;
use crate::seller::application::ports::incoming::use_cases::GetSellerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/sellers/me")]
pub async fn get_my_profile_handler(
    seller: SellerUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.seller.get.execute(seller.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetSellerError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(GetSellerError::RepositoryError(e)) => {
            error!("Failed to load seller {}: {}", seller.user_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    use crate::auth::application::domain::entities::Role;
    use crate::seller::application::domain::entities::{sample_seller, SellerProfile};
    use crate::seller::application::ports::incoming::use_cases::GetSellerUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};

    #[derive(Clone)]
    struct MockGetSellerUseCase {
        result: Result<SellerProfile, GetSellerError>,
    }

    #[async_trait]
    impl GetSellerUseCase for MockGetSellerUseCase {
        async fn execute(&self, _seller_id: Uuid) -> Result<SellerProfile, GetSellerError> {
            self.result.clone()
        }
    }

    async fn me_as(role: Role, result: Result<SellerProfile, GetSellerError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_seller(MockGetSellerUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_my_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/sellers/me")
            .insert_header(bearer(Uuid::new_v4(), role))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[actix_web::test]
    async fn test_my_profile_for_seller() {
        let (status, body) = me_as(Role::Seller, Ok(sample_seller(true, false).to_profile())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "priya@example.com");
        assert!(body["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_my_profile_forbidden_for_admin() {
        let (status, body) = me_as(Role::Admin, Ok(sample_seller(true, false).to_profile())).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["message"], "Forbidden");
    }

    #[actix_web::test]
    async fn test_my_profile_missing_seller() {
        let (status, _) = me_as(Role::Seller, Err(GetSellerError::NotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
