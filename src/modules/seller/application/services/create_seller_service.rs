use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    CreateSellerCommand, CreateSellerError, CreateSellerUseCase,
};
use crate::seller::application::ports::outgoing::{
    NewSellerData, SellerRepository, SellerRepositoryError,
};

pub struct CreateSellerService<R>
where
    R: SellerRepository,
{
    seller_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> CreateSellerService<R>
where
    R: SellerRepository,
{
    pub fn new(seller_repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            seller_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> CreateSellerUseCase for CreateSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSellerCommand,
    ) -> Result<SellerProfile, CreateSellerError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| CreateSellerError::HashingFailed(e.to_string()))?;

        let data = NewSellerData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            company: command.company().map(str::to_string),
            phone: command.phone().to_string(),
            city: command.city().to_string(),
            pincode: command.pincode().to_string(),
            is_active: command.is_active(),
        };

        self.seller_repository
            .create(data)
            .await
            .map(|s| s.to_profile())
            .map_err(|e| match e {
                SellerRepositoryError::EmailAlreadyExists => {
                    CreateSellerError::EmailAlreadyRegistered
                }
                other => CreateSellerError::RepositoryError(other.to_string()),
            })
    }
}
