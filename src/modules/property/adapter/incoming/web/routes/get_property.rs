use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::property::application::ports::incoming::use_cases::GetPropertyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/properties/{id}")]
pub async fn get_property_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    match data.property.get.execute(property_id).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetPropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(GetPropertyError::RepositoryError(e)) => {
            error!("Failed to load property {}: {}", property_id, e);
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

    use crate::property::application::domain::entities::{PropertyView, SellerSummary};
    use crate::property::application::domain::status::PropertyStatus;
    use crate::property::application::ports::incoming::use_cases::GetPropertyUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fakes::sample_property;

    #[derive(Clone)]
    struct MockGetPropertyUseCase {
        result: Result<PropertyView, GetPropertyError>,
    }

    #[async_trait]
    impl GetPropertyUseCase for MockGetPropertyUseCase {
        async fn execute(&self, _property_id: Uuid) -> Result<PropertyView, GetPropertyError> {
            self.result.clone()
        }
    }

    async fn get_with(result: Result<PropertyView, GetPropertyError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_get_property(MockGetPropertyUseCase { result })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(get_property_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/properties/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_get_property_embeds_seller() {
        let seller_id = Uuid::new_v4();
        let view = PropertyView {
            property: sample_property(PropertyStatus::Active, Some(seller_id)),
            seller: Some(SellerSummary {
                id: seller_id,
                name: "Priya".into(),
                email: "priya@example.com".into(),
            }),
        };

        let (status, body) = get_with(Ok(view)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["seller"]["name"], "Priya");
        assert_eq!(body["data"]["seller_id"], seller_id.to_string());
    }

    #[actix_web::test]
    async fn test_get_property_not_found() {
        let (status, body) = get_with(Err(GetPropertyError::NotFound)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "PROPERTY_NOT_FOUND");
    }
}
