use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    UpdateSellerCommand, UpdateSellerError, UpdateSellerUseCase,
};
use crate::seller::application::ports::outgoing::{
    SellerChanges, SellerQuery, SellerRepository, SellerRepositoryError,
};

pub struct UpdateSellerService<R, Q>
where
    R: SellerRepository,
    Q: SellerQuery,
{
    seller_repository: R,
    seller_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R, Q> UpdateSellerService<R, Q>
where
    R: SellerRepository,
    Q: SellerQuery,
{
    pub fn new(
        seller_repository: R,
        seller_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            seller_repository,
            seller_query,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R, Q> UpdateSellerUseCase for UpdateSellerService<R, Q>
where
    R: SellerRepository + Send + Sync,
    Q: SellerQuery + Send + Sync,
{
    async fn execute(
        &self,
        seller_id: Uuid,
        command: UpdateSellerCommand,
    ) -> Result<SellerProfile, UpdateSellerError> {
        let password_hash = match command.password.as_deref() {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateSellerError::HashingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let changes = SellerChanges {
            name: command.name,
            email: command.email,
            password_hash,
            company: command.company,
            phone: command.phone,
            city: command.city,
            pincode: command.pincode,
            is_active: command.is_active,
        };

        // Nothing to write, answer with the current record
        if changes.is_empty() {
            return self
                .seller_query
                .find_by_id(seller_id)
                .await
                .map_err(|e| UpdateSellerError::RepositoryError(e.to_string()))?
                .map(|s| s.to_profile())
                .ok_or(UpdateSellerError::NotFound);
        }

        self.seller_repository
            .update(seller_id, changes)
            .await
            .map(|s| s.to_profile())
            .map_err(|e| match e {
                SellerRepositoryError::NotFound => UpdateSellerError::NotFound,
                SellerRepositoryError::EmailAlreadyExists => {
                    UpdateSellerError::EmailAlreadyRegistered
                }
                SellerRepositoryError::DatabaseError(msg) => UpdateSellerError::RepositoryError(msg),
            })
    }
}
