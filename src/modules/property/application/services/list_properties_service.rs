use async_trait::async_trait;

use crate::property::application::domain::entities::PropertyView;
use crate::property::application::ports::incoming::use_cases::{
    ListPropertiesError, ListPropertiesUseCase,
};
use crate::property::application::ports::outgoing::{PropertyListFilter, PropertyQuery};

pub struct ListPropertiesService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> ListPropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> ListPropertiesUseCase for ListPropertiesService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: PropertyListFilter,
    ) -> Result<Vec<PropertyView>, ListPropertiesError> {
        self.property_query
            .list(filter)
            .await
            .map_err(|e| ListPropertiesError::RepositoryError(e.to_string()))
    }
}
