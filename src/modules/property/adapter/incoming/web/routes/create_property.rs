use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::actor_of;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::property::application::domain::listing::AmenitiesInput;
use crate::property::application::domain::status::PropertyStatus;
use crate::property::application::ports::incoming::use_cases::{
    CreatePropertyCommand, CreatePropertyCommandError, CreatePropertyError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePropertyRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub total_price: Option<f64>,
    pub square_meters: Option<f64>,
    pub zip: Option<String>,
    pub place: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub rooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[serde(default)]
    pub pool: bool,
    #[serde(default)]
    pub parking: bool,
    #[serde(default)]
    pub garden: bool,
    pub property_type: Option<String>,
    pub amenities: Option<AmenitiesInput>,
    #[serde(default)]
    pub images: Vec<String>,
    pub agent_number: Option<String>,
    pub seller_id: Option<Uuid>,
    pub status: Option<PropertyStatus>,
}

impl From<CreatePropertyRequest> for CreatePropertyCommand {
    fn from(req: CreatePropertyRequest) -> Self {
        CreatePropertyCommand {
            title: req.title,
            description: req.description,
            total_price: req.total_price,
            square_meters: req.square_meters,
            zip: req.zip,
            place: req.place,
            city: req.city,
            country: req.country,
            rooms: req.rooms,
            bathrooms: req.bathrooms,
            pool: req.pool,
            parking: req.parking,
            garden: req.garden,
            property_type: req.property_type,
            amenities: req.amenities.map(AmenitiesInput::normalize).unwrap_or_default(),
            images: req.images,
            agent_number: req.agent_number,
            seller_id: req.seller_id,
            status: req.status,
        }
    }
}

#[post("/api/properties")]
pub async fn create_property_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePropertyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreatePropertyCommand::from(req.into_inner()).validated() {
        Ok(cmd) => cmd,
        Err(CreatePropertyCommandError::MissingTitle) => {
            return ApiResponse::bad_request("TITLE_REQUIRED", "Title is required");
        }
    };

    match data.property.create.execute(actor_of(&user), command).await {
        Ok(property) => ApiResponse::created(property),

        Err(CreatePropertyError::SellerNotFound) => {
            ApiResponse::not_found("SELLER_NOT_FOUND", "Seller not found")
        }

        Err(CreatePropertyError::SellerDeleted) => {
            ApiResponse::forbidden("SELLER_DELETED", "Seller account deleted")
        }

        Err(CreatePropertyError::SellerInactive) => {
            ApiResponse::forbidden("SELLER_INACTIVE", "Seller is not activated")
        }

        Err(e) => {
            error!("Failed to create property for {}: {}", user.user_id, e);
            ApiResponse::internal_error()
        }
    }
}
