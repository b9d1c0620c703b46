use async_trait::async_trait;
use uuid::Uuid;

use crate::enquiry::application::domain::entities::LinkedProperty;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PropertyLookupError {
    #[error("Lookup failed: {0}")]
    LookupFailed(String),
}

#[async_trait]
pub trait PropertyLookup: Send + Sync {
    async fn find_property(&self, id: Uuid) -> Result<Option<LinkedProperty>, PropertyLookupError>;
}
