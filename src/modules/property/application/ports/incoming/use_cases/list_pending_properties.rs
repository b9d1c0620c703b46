use async_trait::async_trait;

use crate::property::application::domain::entities::PropertyView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingPropertiesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPendingPropertiesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PropertyView>, ListPendingPropertiesError>;
}
