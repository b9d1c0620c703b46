use async_trait::async_trait;

use crate::property::application::domain::entities::PropertyView;
use crate::property::application::ports::incoming::use_cases::{
    ListPendingPropertiesError, ListPendingPropertiesUseCase,
};
use crate::property::application::ports::outgoing::PropertyQuery;

pub struct ListPendingPropertiesService<Q>
where
    Q: PropertyQuery,
{
    property_query: Q,
}

impl<Q> ListPendingPropertiesService<Q>
where
    Q: PropertyQuery,
{
    pub fn new(property_query: Q) -> Self {
        Self { property_query }
    }
}

#[async_trait]
impl<Q> ListPendingPropertiesUseCase for ListPendingPropertiesService<Q>
where
    Q: PropertyQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PropertyView>, ListPendingPropertiesError> {
        self.property_query
            .list_pending()
            .await
            .map_err(|e| ListPendingPropertiesError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::application::domain::status::PropertyStatus;
    use crate::tests::support::fakes::{sample_property, FakePropertyStore};

    #[tokio::test]
    async fn returns_only_pending() {
        let store = FakePropertyStore::with(vec![
            sample_property(PropertyStatus::Pending, None),
            sample_property(PropertyStatus::Active, None),
        ]);
        let service = ListPendingPropertiesService::new(store);

        let pending = service.execute().await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].property.status, PropertyStatus::Pending);
    }
}
