use async_trait::async_trait;
use uuid::Uuid;

use crate::property::application::domain::moderation::SellerCascade;
use crate::property::application::ports::incoming::use_cases::{
    CascadeOutcome, CascadeSellerPropertiesError, CascadeSellerPropertiesUseCase,
};
use crate::property::application::ports::outgoing::PropertyRepository;

pub struct CascadeSellerPropertiesService<R>
where
    R: PropertyRepository,
{
    property_repository: R,
}

impl<R> CascadeSellerPropertiesService<R>
where
    R: PropertyRepository,
{
    pub fn new(property_repository: R) -> Self {
        Self {
            property_repository,
        }
    }
}

#[async_trait]
impl<R> CascadeSellerPropertiesUseCase for CascadeSellerPropertiesService<R>
where
    R: PropertyRepository + Send + Sync,
{
    async fn execute(
        &self,
        seller_id: Uuid,
        cascade: SellerCascade,
    ) -> Result<CascadeOutcome, CascadeSellerPropertiesError> {
        let properties_affected = self
            .property_repository
            .apply_seller_cascade(seller_id, cascade)
            .await
            .map_err(|e| CascadeSellerPropertiesError::RepositoryError(e.to_string()))?;

        tracing::info!(
            seller_id = %seller_id,
            ?cascade,
            properties_affected,
            "Seller listings updated"
        );

        Ok(CascadeOutcome {
            seller_id,
            properties_affected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::application::domain::status::PropertyStatus;
    use crate::tests::support::fakes::{sample_property, FakePropertyStore};

    #[tokio::test]
    async fn soft_delete_all_marks_every_listing_owner_removed() {
        let seller_id = Uuid::new_v4();
        let store = FakePropertyStore::with(vec![
            sample_property(PropertyStatus::Active, Some(seller_id)),
            sample_property(PropertyStatus::Pending, Some(seller_id)),
            sample_property(PropertyStatus::Active, Some(Uuid::new_v4())),
        ]);
        let service = CascadeSellerPropertiesService::new(store.clone());

        let outcome = service
            .execute(seller_id, SellerCascade::SoftDeleteAll)
            .await
            .unwrap();

        assert_eq!(outcome.properties_affected, 2);
        for property in store.all().iter().filter(|p| p.seller_id == Some(seller_id)) {
            assert!(property.owner_removed);
            assert_eq!(property.status, PropertyStatus::Inactive);
        }
    }

    #[tokio::test]
    async fn restore_all_skips_listings_not_removed_by_cascade() {
        let seller_id = Uuid::new_v4();
        let mut removed = sample_property(PropertyStatus::Inactive, Some(seller_id));
        removed.owner_removed = true;
        let archived = sample_property(PropertyStatus::Archived, Some(seller_id));
        let store = FakePropertyStore::with(vec![removed.clone(), archived.clone()]);
        let service = CascadeSellerPropertiesService::new(store.clone());

        let outcome = service
            .execute(seller_id, SellerCascade::RestoreAll)
            .await
            .unwrap();

        assert_eq!(outcome.properties_affected, 1);
        assert_eq!(store.get(removed.id).unwrap().status, PropertyStatus::Active);
        assert_eq!(store.get(archived.id).unwrap().status, PropertyStatus::Archived);
    }
}
