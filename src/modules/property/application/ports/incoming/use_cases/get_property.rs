use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::PropertyView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPropertyError {
    #[error("Property not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPropertyUseCase: Send + Sync {
    async fn execute(&self, property_id: Uuid) -> Result<PropertyView, GetPropertyError>;
}
