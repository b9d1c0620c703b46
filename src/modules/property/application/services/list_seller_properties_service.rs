use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::entities::Property;
use crate::property::application::ports::incoming::use_cases::{
    ListSellerPropertiesError, ListSellerPropertiesUseCase,
};
use crate::property::application::ports::outgoing::PropertyQuery;

pub struct ListSellerPropertiesService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> ListSellerPropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> ListSellerPropertiesUseCase for ListSellerPropertiesService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self, seller_id: Uuid) -> Result<Vec<Property>, ListSellerPropertiesError> {
        self.property_query
            .list_by_seller(seller_id)
            .await
            .map_err(|e| ListSellerPropertiesError::RepositoryError(e.to_string()))
    }
}
