use async_trait::async_trait;
use uuid::Uuid;

use super::listing_access::{ensure_may_edit, EditDenied};
use crate::property::application::domain::actor::Actor;
use crate::property::application::ports::incoming::use_cases::{
    DeletePropertyError, DeletePropertyUseCase,
};
use crate::property::application::ports::outgoing::{
    PropertyQuery, PropertyRepository, PropertyRepositoryError,
};
use crate::seller::application::ports::outgoing::SellerQuery;

pub struct DeletePropertyService<R, Q, S>
where
    R: PropertyRepository,
    Q: PropertyQuery,
    S: SellerQuery,
{
    property_repository: R,
    property_query: Q,
    seller_query: S,
}

impl<R, Q, S> DeletePropertyService<R, Q, S>
where
    R: PropertyRepository,
    Q: PropertyQuery,
    S: SellerQuery,
{
    pub fn new(property_repository: R, property_query: Q, seller_query: S) -> Self {
        Self {
            property_repository,
            property_query,
            seller_query,
        }
    }
}

#[async_trait]
impl<R, Q, S> DeletePropertyUseCase for DeletePropertyService<R, Q, S>
where
    R: PropertyRepository + Send + Sync,
    Q: PropertyQuery + Send + Sync,
    S: SellerQuery + Send + Sync,
{
    async fn execute(&self, actor: Actor, property_id: Uuid) -> Result<(), DeletePropertyError> {
        let property = self
            .property_query
            .find_by_id(property_id)
            .await
            .map_err(|e| DeletePropertyError::RepositoryError(e.to_string()))?
            .ok_or(DeletePropertyError::NotFound)?;

        ensure_may_edit(&self.seller_query, actor, &property)
            .await
            .map_err(|denied| match denied {
                EditDenied::NotOwner => DeletePropertyError::NotOwner,
                EditDenied::SellerNotActive => DeletePropertyError::SellerNotActive,
                EditDenied::Lookup(msg) => DeletePropertyError::RepositoryError(msg),
            })?;

        self.property_repository
            .delete(property_id)
            .await
            .map_err(|e| match e {
                PropertyRepositoryError::NotFound => DeletePropertyError::NotFound,
                other => DeletePropertyError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(property_id = %property_id, "Property deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::property::application::domain::status::PropertyStatus;
    use crate::seller::application::domain::entities::sample_seller;
    use crate::tests::support::fakes::{sample_property, FakePropertyStore, FakeSellerStore};

    #[tokio::test]
    async fn owner_deletes_listing() {
        let seller = sample_seller(true, false);
        let property = sample_property(PropertyStatus::Active, Some(seller.id));
        let store = FakePropertyStore::with(vec![property.clone()]);
        let service = DeletePropertyService::new(
            store.clone(),
            store.clone(),
            FakeSellerStore::with(vec![seller.clone()]),
        );

        service
            .execute(Actor::Seller(UserId::from(seller.id)), property.id)
            .await
            .unwrap();

        assert!(store.get(property.id).is_none());
    }

    #[tokio::test]
    async fn seller_cannot_delete_unowned_listing() {
        let seller = sample_seller(true, false);
        let property = sample_property(PropertyStatus::Active, None);
        let store = FakePropertyStore::with(vec![property.clone()]);
        let service = DeletePropertyService::new(
            store.clone(),
            store.clone(),
            FakeSellerStore::with(vec![seller.clone()]),
        );

        let result = service
            .execute(Actor::Seller(UserId::from(seller.id)), property.id)
            .await;

        assert!(matches!(result, Err(DeletePropertyError::NotOwner)));
        assert!(store.get(property.id).is_some());
    }

    #[tokio::test]
    async fn admin_deletes_any_listing() {
        let property = sample_property(PropertyStatus::Pending, Some(Uuid::new_v4()));
        let store = FakePropertyStore::with(vec![property.clone()]);
        let service =
            DeletePropertyService::new(store.clone(), store.clone(), FakeSellerStore::default());

        service
            .execute(Actor::Admin(UserId::from(Uuid::new_v4())), property.id)
            .await
            .unwrap();

        assert!(store.all().is_empty());
    }
}
