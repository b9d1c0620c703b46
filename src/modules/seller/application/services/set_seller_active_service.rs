use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    SetSellerActiveError, SetSellerActiveUseCase,
};
use crate::seller::application::ports::outgoing::{SellerRepository, SellerRepositoryError};

pub struct SetSellerActiveService<R>
where
    R: SellerRepository,
{
    seller_repository: R,
}

impl<R> SetSellerActiveService<R>
where
    R: SellerRepository,
{
    pub fn new(seller_repository: R) -> Self {
        Self { seller_repository }
    }
}

#[async_trait]
impl<R> SetSellerActiveUseCase for SetSellerActiveService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(
        &self,
        seller_id: Uuid,
        active: bool,
    ) -> Result<SellerProfile, SetSellerActiveError> {
        let seller = self
            .seller_repository
            .set_active(seller_id, active)
            .await
            .map_err(|e| match e {
                SellerRepositoryError::NotFound => SetSellerActiveError::NotFound,
                other => SetSellerActiveError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(seller_id = %seller_id, active, "Seller activation changed");
        Ok(seller.to_profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seller::application::domain::entities::sample_seller;
    use crate::tests::support::fakes::FakeSellerStore;

    #[tokio::test]
    async fn activates_seller() {
        let seller = sample_seller(false, false);
        let store = FakeSellerStore::with(vec![seller.clone()]);
        let service = SetSellerActiveService::new(store.clone());

        let profile = service.execute(seller.id, true).await.unwrap();

        assert!(profile.is_active);
        assert!(store.get(seller.id).unwrap().is_active);
    }

    #[tokio::test]
    async fn missing_seller_is_not_found() {
        let service = SetSellerActiveService::new(FakeSellerStore::default());

        let result = service.execute(Uuid::new_v4(), false).await;
        assert!(matches!(result, Err(SetSellerActiveError::NotFound)));
    }
}
