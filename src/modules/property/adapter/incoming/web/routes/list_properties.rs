use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::property::application::domain::status::PropertyStatus;
use crate::property::application::ports::incoming::use_cases::ListPropertiesError;
use crate::property::application::ports::outgoing::PropertyListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListPropertiesParams {
    pub status: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub property_type: Option<String>,
    pub max_price: Option<f64>,
    pub min_rooms: Option<i32>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[get("/api/properties")]
pub async fn list_properties_handler(
    params: web::Query<ListPropertiesParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let params = params.into_inner();

    let status = match non_empty(params.status) {
        None => PropertyStatus::Active,
        Some(raw) => match raw.parse::<PropertyStatus>() {
            Ok(status) => status,
            Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
        },
    };

    let filter = PropertyListFilter {
        status,
        city: non_empty(params.city),
        country: non_empty(params.country),
        property_type: non_empty(params.property_type),
        max_price: params.max_price,
        min_rooms: params.min_rooms,
    };

    match data.property.list.execute(filter).await {
        Ok(properties) => ApiResponse::success(properties),

        Err(ListPropertiesError::RepositoryError(e)) => {
            error!("Failed to list properties: {}", e);
            ApiResponse::internal_error()
        }
    }
}
