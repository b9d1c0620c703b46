use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::actor_of;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::property::application::ports::incoming::use_cases::DeletePropertyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/properties/{id}")]
pub async fn delete_property_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data
        .property
        .delete
        .execute(actor_of(&user), property_id)
        .await
    {
        Ok(()) => {
            info!(property_id = %property_id, by = %user.user_id, "Property deleted");
            ApiResponse::no_content()
        }

        Err(DeletePropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(DeletePropertyError::NotOwner) => ApiResponse::forbidden("NOT_OWNER", "Not allowed"),

        Err(DeletePropertyError::SellerNotActive) => {
            ApiResponse::forbidden("SELLER_NOT_ACTIVE", "Seller is not active or deleted")
        }

        Err(DeletePropertyError::RepositoryError(e)) => {
            error!("Failed to delete property {}: {}", property_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::auth::application::domain::entities::Role;
    use crate::property::application::domain::actor::Actor;
    use crate::property::application::ports::incoming::use_cases::DeletePropertyUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};

    #[derive(Clone)]
    struct MockDeletePropertyUseCase {
        result: Result<(), DeletePropertyError>,
    }

    #[async_trait]
    impl DeletePropertyUseCase for MockDeletePropertyUseCase {
        async fn execute(&self, _actor: Actor, _id: Uuid) -> Result<(), DeletePropertyError> {
            self.result.clone()
        }
    }

    async fn delete_with(role: Role, result: Result<(), DeletePropertyError>) -> StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_delete_property(MockDeletePropertyUseCase { result })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(delete_property_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/properties/{}", Uuid::new_v4()))
            .insert_header(bearer(Uuid::new_v4(), role))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_delete_property_no_content() {
        assert_eq!(delete_with(Role::Seller, Ok(())).await, StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_property_inactive_seller() {
        assert_eq!(
            delete_with(Role::Seller, Err(DeletePropertyError::SellerNotActive)).await,
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_delete_property_missing() {
        assert_eq!(
            delete_with(Role::Admin, Err(DeletePropertyError::NotFound)).await,
            StatusCode::NOT_FOUND
        );
    }
}
