use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{
    CurrentAccount, GetCurrentAccountError, GetCurrentAccountUseCase,
};
use crate::auth::application::ports::outgoing::AdminRepository;
use crate::seller::application::ports::outgoing::SellerQuery;

/// Resolves a token subject to the admin or seller it belongs to.
pub struct GetCurrentAccountService<A, S>
where
    A: AdminRepository,
    S: SellerQuery,
{
    admin_repository: A,
    seller_query: S,
}

impl<A, S> GetCurrentAccountService<A, S>
where
    A: AdminRepository,
    S: SellerQuery,
{
    pub fn new(admin_repository: A, seller_query: S) -> Self {
        Self {
            admin_repository,
            seller_query,
        }
    }
}

#[async_trait]
impl<A, S> GetCurrentAccountUseCase for GetCurrentAccountService<A, S>
where
    A: AdminRepository + Send + Sync,
    S: SellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        role: Role,
    ) -> Result<CurrentAccount, GetCurrentAccountError> {
        match role {
            Role::Admin => {
                let admin = self
                    .admin_repository
                    .find_by_id(account_id)
                    .await
                    .map_err(|e| GetCurrentAccountError::RepositoryError(e.to_string()))?
                    .ok_or(GetCurrentAccountError::AccountNotFound)?;

                Ok(CurrentAccount {
                    id: admin.id,
                    role,
                    name: admin.name,
                    email: admin.email,
                    is_active: None,
                })
            }
            Role::Seller => {
                let seller = self
                    .seller_query
                    .find_by_id(account_id)
                    .await
                    .map_err(|e| GetCurrentAccountError::RepositoryError(e.to_string()))?
                    .filter(|s| !s.is_deleted)
                    .ok_or(GetCurrentAccountError::AccountNotFound)?;

                Ok(CurrentAccount {
                    id: seller.id,
                    role,
                    name: seller.name,
                    email: seller.email,
                    is_active: Some(seller.is_active),
                })
            }
        }
    }
}
