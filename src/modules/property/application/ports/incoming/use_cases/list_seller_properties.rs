use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::Property;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSellerPropertiesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListSellerPropertiesUseCase: Send + Sync {
    async fn execute(&self, seller_id: Uuid) -> Result<Vec<Property>, ListSellerPropertiesError>;
}
