use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::{ModerationAction, ModerationError};
use crate::property::application::ports::incoming::use_cases::{
    ModeratePropertyError, ModeratePropertyUseCase,
};
use crate::property::application::ports::outgoing::{PropertyRepository, PropertyRepositoryError};

pub struct ModeratePropertyService<R>
where
    R: PropertyRepository,
{
    property_repository: R,
}

impl<R> ModeratePropertyService<R>
where
    R: PropertyRepository,
{
    pub fn new(property_repository: R) -> Self {
        Self {
            property_repository,
        }
    }
}

#[async_trait]
impl<R> ModeratePropertyUseCase for ModeratePropertyService<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(
        &self,
        property_id: Uuid,
        action: ModerationAction,
    ) -> Result<Property, ModeratePropertyError> {
        let change = action.resolve(Utc::now()).map_err(|e| match e {
            ModerationError::RejectionReasonRequired => {
                ModeratePropertyError::RejectionReasonRequired
            }
        })?;

        let property = self
            .property_repository
            .apply_moderation(property_id, &change)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => ModeratePropertyError::NotFound,
                other => ModeratePropertyError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(
            property_id = %property_id,
            status = %property.status,
            "Property moderated"
        );

        Ok(property)
    }
}
