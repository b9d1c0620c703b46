use async_trait::async_trait;

use crate::property::application::domain::entities::PropertyView;
use crate::property::application::ports::outgoing::PropertyListFilter;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPropertiesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListPropertiesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: PropertyListFilter,
    ) -> Result<Vec<PropertyView>, ListPropertiesError>;
}
