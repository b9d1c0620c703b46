use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::listing_access::{ensure_may_edit, EditDenied};
use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::ModerationError;
use crate::property::application::domain::policy::workflow_update;
use crate::property::application::ports::incoming::use_cases::{
    UpdatePropertyCommand, UpdatePropertyError, UpdatePropertyUseCase,
};
use crate::property::application::ports::outgoing::{
    PropertyChanges, PropertyQuery, PropertyRepository, PropertyRepositoryError,
};
use crate::seller::application::ports::outgoing::SellerQuery;
use crate::shared::patch::PatchField;

pub struct UpdatePropertyService<R, Q, S>
where
    R: PropertyRepository,
    Q: PropertyQuery,
    S: SellerQuery,
{
    property_repository: R,
    property_query: Q,
    seller_query: S,
}

impl<R, Q, S> UpdatePropertyService<R, Q, S>
where
    R: PropertyRepository,
    Q: PropertyQuery,
    S: SellerQuery,
{
    pub fn new(property_repository: R, property_query: Q, seller_query: S) -> Self {
        Self {
            property_repository,
            property_query,
            seller_query,
        }
    }
}

#[async_trait]
impl<R, Q, S> UpdatePropertyUseCase for UpdatePropertyService<R, Q, S>
where
    R: PropertyRepository + Send + Sync,
    Q: PropertyQuery + Send + Sync,
    S: SellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        property_id: Uuid,
        command: UpdatePropertyCommand,
    ) -> Result<Property, UpdatePropertyError> {
        let property = self
            .property_query
            .find_by_id(property_id)
            .await
            .map_err(|e| UpdatePropertyError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePropertyError::NotFound)?;

        ensure_may_edit(&self.seller_query, actor, &property)
            .await
            .map_err(|denied| match denied {
                EditDenied::NotOwner => UpdatePropertyError::NotOwner,
                EditDenied::SellerNotActive => UpdatePropertyError::SellerNotActive,
                EditDenied::Lookup(msg) => UpdatePropertyError::RepositoryError(msg),
            })?;

        let workflow = workflow_update(
            actor,
            command.status,
            command.rejection_reason,
            Utc::now(),
        )
        .map_err(|e| match e {
            ModerationError::RejectionReasonRequired => {
                UpdatePropertyError::RejectionReasonRequired
            }
        })?;

        let changes = PropertyChanges {
            title: command.title,
            description: command.description,
            total_price: command.total_price,
            square_meters: command.square_meters,
            zip: command.zip,
            place: command.place,
            city: command.city,
            country: command.country,
            rooms: command.rooms,
            bathrooms: command.bathrooms,
            pool: command.pool,
            parking: command.parking,
            garden: command.garden,
            property_type: command.property_type,
            amenities: command.amenities,
            images: command.images,
            agent_number: command.agent_number,
            seller_id: if actor.is_admin() {
                command.seller_id
            } else {
                PatchField::Unset
            },
            status: workflow.status,
            rejection_reason: workflow.rejection_reason,
            published_at: workflow.published_at,
        };

        if changes.is_empty() {
            return Ok(property);
        }

        self.property_repository
            .update(property_id, changes)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => UpdatePropertyError::NotFound,
                other => UpdatePropertyError::RepositoryError(other.to_string()),
            })
    }
}
