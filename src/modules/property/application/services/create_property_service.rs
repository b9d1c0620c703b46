use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::property::application::domain::actor::Actor;
use crate::property::application::domain::entities::Property;
use crate::property::application::domain::policy::initial_workflow;
use crate::property::application::domain::ref_number::property_ref;
use crate::property::application::ports::incoming::use_cases::{
    CreatePropertyCommand, CreatePropertyError, CreatePropertyUseCase,
};
use crate::property::application::ports::outgoing::{
    NewPropertyData, PropertyRepository, PropertyRepositoryError,
};
use crate::seller::application::domain::entities::ListingIneligibility;
use crate::seller::application::ports::outgoing::SellerQuery;

const MAX_REF_ATTEMPTS: u32 = 3;

pub struct CreatePropertyService<R, S>
where
    R: PropertyRepository,
    S: SellerQuery,
{
    property_repository: R,
    seller_query: S,
}

impl<R, S> CreatePropertyService<R, S>
where
    R: PropertyRepository,
    S: SellerQuery,
{
    pub fn new(property_repository: R, seller_query: S) -> Self {
        Self {
            property_repository,
            seller_query,
        }
    }

    async fn check_seller(&self, seller_id: uuid::Uuid) -> Result<(), CreatePropertyError> {
        let seller = self
            .seller_query
            .find_by_id(seller_id)
            .await
            .map_err(|e| CreatePropertyError::RepositoryError(e.to_string()))?
            .ok_or(CreatePropertyError::SellerNotFound)?;

        seller.ensure_can_list().map_err(|e| match e {
            ListingIneligibility::Deleted => CreatePropertyError::SellerDeleted,
            ListingIneligibility::Inactive => CreatePropertyError::SellerInactive,
        })
    }
}

#[async_trait]
impl<R, S> CreatePropertyUseCase for CreatePropertyService<R, S>
where
    R: PropertyRepository + Send + Sync,
    S: SellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        actor: Actor,
        command: CreatePropertyCommand,
    ) -> Result<Property, CreatePropertyError> {
        let seller_to_check = match actor {
            Actor::Seller(id) => Some(id.value()),
            Actor::Admin(_) => command.seller_id,
        };

        if let Some(seller_id) = seller_to_check {
            self.check_seller(seller_id).await?;
        }

        let now = Utc::now();
        let workflow = initial_workflow(actor, command.status, command.seller_id, now);

        let base = NewPropertyData {
            ref_number: String::new(),
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
            seller_id: workflow.seller_id,
            agent_number: command.agent_number.unwrap_or_default(),
            status: workflow.status,
            submitted_by: workflow.submitted_by,
            submitted_at: workflow.submitted_at,
            published_at: workflow.published_at,
        };

        for attempt in 1..=MAX_REF_ATTEMPTS {
            let mut data = base.clone();
            data.ref_number = property_ref(now.year(), &mut rand::thread_rng());

            match self.property_repository.create(data).await {
                Ok(property) => {
                    tracing::info!(
                        property_id = %property.id,
                        ref_number = %property.ref_number,
                        status = %property.status,
                        "Property created"
                    );
                    return Ok(property);
                }
                Err(PropertyRepositoryError::RefNumberTaken) => {
                    tracing::warn!(attempt, "Reference number collision, regenerating");
                }
                Err(e) => return Err(CreatePropertyError::RepositoryError(e.to_string())),
            }
        }

        Err(CreatePropertyError::RefNumberExhausted)
    }
}
