use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{GetSellerError, GetSellerUseCase};
use crate::seller::application::ports::outgoing::SellerQuery;

pub struct GetSellerService<Q>
where
    Q: SellerQuery,
{
    seller_query: Q,
}

impl<Q> GetSellerService<Q>
where
    Q: SellerQuery,
{
    pub fn new(seller_query: Q) -> Self {
        Self { seller_query }
    }
}

#[async_trait]
impl<Q> GetSellerUseCase for GetSellerService<Q>
where
    Q: SellerQuery + Send + Sync,
{
    async fn execute(&self, seller_id: Uuid) -> Result<SellerProfile, GetSellerError> {
        self.seller_query
            .find_by_id(seller_id)
            .await
            .map_err(|e| GetSellerError::RepositoryError(e.to_string()))?
            .map(|s| s.to_profile())
            .ok_or(GetSellerError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seller::application::domain::entities::sample_seller;
    use crate::tests::support::fakes::FakeSellerStore;

    #[tokio::test]
    async fn returns_profile() {
        let seller = sample_seller(true, false);
        let service = GetSellerService::new(FakeSellerStore::with(vec![seller.clone()]));

        let profile = service.execute(seller.id).await.unwrap();
        assert_eq!(profile.email, seller.email);
    }

    #[tokio::test]
    async fn missing_seller_is_not_found() {
        let service = GetSellerService::new(FakeSellerStore::default());

        let result = service.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(GetSellerError::NotFound)));
    }
}
