use async_trait::async_trait;

use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    ListSellersError, ListSellersUseCase,
};
use crate::seller::application::ports::outgoing::SellerQuery;

pub struct ListSellersService<Q>
where
    Q: SellerQuery,
{
    seller_query: Q,
}

impl<Q> ListSellersService<Q>
where
    Q: SellerQuery,
{
    pub fn new(seller_query: Q) -> Self {
        Self { seller_query }
    }
}

#[async_trait]
impl<Q> ListSellersUseCase for ListSellersService<Q>
where
    Q: SellerQuery + Send + Sync,
{
    async fn execute(&self, deleted: bool) -> Result<Vec<SellerProfile>, ListSellersError> {
        let sellers = self
            .seller_query
            .list(deleted)
            .await
            .map_err(|e| ListSellersError::RepositoryError(e.to_string()))?;

        Ok(sellers.iter().map(|s| s.to_profile()).collect())
    }
}
