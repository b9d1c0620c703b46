use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    RestoreSellerError, RestoreSellerUseCase,
};
use crate::seller::application::ports::outgoing::{
    SellerQuery, SellerRepository, SellerRepositoryError,
};

pub struct RestoreSellerService<R, Q>
where
    R: SellerRepository,
    Q: SellerQuery,
{
    seller_repository: R,
    seller_query: Q,
}

impl<R, Q> RestoreSellerService<R, Q>
where
    R: SellerRepository,
    Q: SellerQuery,
{
    pub fn new(seller_repository: R, seller_query: Q) -> Self {
        Self {
            seller_repository,
            seller_query,
        }
    }
}

#[async_trait]
impl<R, Q> RestoreSellerUseCase for RestoreSellerService<R, Q>
where
    R: SellerRepository + Send + Sync,
    Q: SellerQuery + Send + Sync,
{
    async fn execute(&self, seller_id: Uuid) -> Result<SellerProfile, RestoreSellerError> {
        let seller = self
            .seller_query
            .find_by_id(seller_id)
            .await
            .map_err(|e| RestoreSellerError::RepositoryError(e.to_string()))?
            .ok_or(RestoreSellerError::NotFound)?;

        if !seller.is_deleted {
            return Err(RestoreSellerError::NotDeleted);
        }

        self.seller_repository
            .restore(seller_id)
            .await
            .map(|s| s.to_profile())
            .map_err(|e| match e {
                SellerRepositoryError::NotFound => RestoreSellerError::NotFound,
                other => RestoreSellerError::RepositoryError(other.to_string()),
            })
    }
}
