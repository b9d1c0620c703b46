use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::seller::application::ports::incoming::use_cases::RestoreSellerError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/sellers/{id}/restore")]
pub async fn restore_seller_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let seller_id = path.into_inner();

    match data.seller.restore.execute(seller_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(RestoreSellerError::NotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(RestoreSellerError::NotDeleted) => {
            ApiResponse::bad_request("SELLER_NOT_DELETED", "Seller is not deleted")
        }

        Err(RestoreSellerError::RepositoryError(e)) => {
            error!("Failed to restore seller {}: {}", seller_id, e);
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

    use crate::auth::application::domain::entities::Role;
    use crate::seller::application::domain::entities::{sample_seller, SellerProfile};
    use crate::seller::application::ports::incoming::use_cases::RestoreSellerUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};

    #[derive(Clone)]
    struct MockRestoreSellerUseCase {
        result: Result<SellerProfile, RestoreSellerError>,
    }

    #[async_trait]
    impl RestoreSellerUseCase for MockRestoreSellerUseCase {
        async fn execute(&self, _seller_id: Uuid) -> Result<SellerProfile, RestoreSellerError> {
            self.result.clone()
        }
    }

    async fn restore(result: Result<SellerProfile, RestoreSellerError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_restore_seller(MockRestoreSellerUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(restore_seller_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/sellers/{}/restore", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4(), Role::Admin))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_restore_seller_reactivates() {
        let (status, body) = restore(Ok(sample_seller(true, false).to_profile())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_active"], true);
        assert_eq!(body["data"]["is_deleted"], false);
    }

    #[actix_web::test]
    async fn test_restore_live_seller_is_bad_request() {
        let (status, body) = restore(Err(RestoreSellerError::NotDeleted)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Seller is not deleted");
    }
}
