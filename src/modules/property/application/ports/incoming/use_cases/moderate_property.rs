use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::Property;
use crate::property::application::domain::moderation::ModerationAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ModeratePropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Rejection reason is required")]
    RejectionReasonRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ModeratePropertyUseCase: Send + Sync {
    async fn execute(
        &self,
        property_id: Uuid,
        action: ModerationAction,
    ) -> Result<Property, ModeratePropertyError>;
}
