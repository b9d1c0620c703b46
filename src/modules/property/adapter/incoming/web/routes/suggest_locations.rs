use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::property::application::ports::incoming::use_cases::SuggestLocationsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SuggestLocationsParams {
    #[serde(default)]
    pub search: String,
}

#[get("/api/locations")]
pub async fn suggest_locations_handler(
    params: web::Query<SuggestLocationsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.property.locations.execute(&params.search).await {
        Ok(suggestions) => ApiResponse::success(suggestions),

        Err(SuggestLocationsError::RepositoryError(e)) => {
            error!("Location lookup for {:?} failed: {}", params.search, e);
            ApiResponse::internal_error()
        }
    }
}
