use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use super::actor_of;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::property::application::domain::listing::AmenitiesInput;
use crate::property::application::domain::status::PropertyStatus;
use crate::property::application::ports::incoming::use_cases::{
    UpdatePropertyCommand, UpdatePropertyCommandError, UpdatePropertyError,
};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub description: PatchField<String>,
    #[serde(default)]
    pub total_price: PatchField<f64>,
    #[serde(default)]
    pub square_meters: PatchField<f64>,
    #[serde(default)]
    pub zip: PatchField<String>,
    #[serde(default)]
    pub place: PatchField<String>,
    #[serde(default)]
    pub city: PatchField<String>,
    #[serde(default)]
    pub country: PatchField<String>,
    #[serde(default)]
    pub rooms: PatchField<i32>,
    #[serde(default)]
    pub bathrooms: PatchField<i32>,
    pub pool: Option<bool>,
    pub parking: Option<bool>,
    pub garden: Option<bool>,
    #[serde(default)]
    pub property_type: PatchField<String>,
    pub amenities: Option<AmenitiesInput>,
    pub images: Option<Vec<String>>,
    pub agent_number: Option<String>,
    #[serde(default)]
    pub seller_id: PatchField<Uuid>,
    pub status: Option<PropertyStatus>,
    pub rejection_reason: Option<String>,
}

impl From<UpdatePropertyRequest> for UpdatePropertyCommand {
    fn from(req: UpdatePropertyRequest) -> Self {
        UpdatePropertyCommand {
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
            amenities: req.amenities.map(AmenitiesInput::normalize),
            images: req.images,
            agent_number: req.agent_number,
            seller_id: req.seller_id,
            status: req.status,
            rejection_reason: req.rejection_reason,
        }
    }
}

#[put("/api/properties/{id}")]
pub async fn update_property_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePropertyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let property_id = path.into_inner();

    let command = match UpdatePropertyCommand::from(req.into_inner()).validated() {
        Ok(cmd) => cmd,
        Err(UpdatePropertyCommandError::EmptyTitle) => {
            return ApiResponse::bad_request("TITLE_REQUIRED", "Title cannot be empty");
        }
    };

    match data
        .property
        .update
        .execute(actor_of(&user), property_id, command)
        .await
    {
        Ok(property) => ApiResponse::success(property),

        Err(UpdatePropertyError::NotFound) => {
            ApiResponse::not_found("PROPERTY_NOT_FOUND", "Property not found")
        }

        Err(UpdatePropertyError::NotOwner) => ApiResponse::forbidden("NOT_OWNER", "Not allowed"),

        Err(UpdatePropertyError::SellerNotActive) => {
            ApiResponse::forbidden("SELLER_NOT_ACTIVE", "Seller is not active or deleted")
        }

        Err(UpdatePropertyError::RejectionReasonRequired) => {
            ApiResponse::bad_request("REASON_REQUIRED", "Rejection reason is required")
        }

        Err(UpdatePropertyError::RepositoryError(e)) => {
            error!("Failed to update property {}: {}", property_id, e);
            ApiResponse::internal_error()
        }
    }
}
