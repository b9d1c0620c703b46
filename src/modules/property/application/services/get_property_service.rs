use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::PropertyView;
use crate::property::application::ports::incoming::use_cases::{
    GetPropertyError, GetPropertyUseCase,
};
use crate::property::application::ports::outgoing::PropertyQuery;

pub struct GetPropertyService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> GetPropertyService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> GetPropertyUseCase for GetPropertyService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self, property_id: Uuid) -> Result<PropertyView, GetPropertyError> {
        self.property_query
            .find_view(property_id)
            .await
            .map_err(|e| GetPropertyError::RepositoryError(e.to_string()))?
            .ok_or(GetPropertyError::NotFound)
    }
}
