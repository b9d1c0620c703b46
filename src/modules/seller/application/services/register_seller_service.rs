use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::seller::application::domain::entities::SellerProfile;
use crate::seller::application::ports::incoming::use_cases::{
    RegisterSellerCommand, RegisterSellerError, RegisterSellerUseCase,
};
use crate::seller::application::ports::outgoing::{
    NewSellerData, SellerRepository, SellerRepositoryError,
};

pub struct RegisterSellerService<R>
where
    R: SellerRepository,
{
    seller_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterSellerService<R>
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
impl<R> RegisterSellerUseCase for RegisterSellerService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterSellerCommand,
    ) -> Result<SellerProfile, RegisterSellerError> {
        let existing = self
            .seller_repository
            .find_by_email(command.email())
            .await
            .map_err(|e| RegisterSellerError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterSellerError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterSellerError::HashingFailed(e.to_string()))?;

        // Self-registered sellers wait for admin activation
        let data = NewSellerData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            password_hash,
            company: command.company().map(str::to_string),
            phone: command.phone().to_string(),
            city: command.city().to_string(),
            pincode: command.pincode().to_string(),
            is_active: false,
        };

        let seller = self
            .seller_repository
            .create(data)
            .await
            .map_err(|e| match e {
                SellerRepositoryError::EmailAlreadyExists => {
                    RegisterSellerError::EmailAlreadyRegistered
                }
                other => RegisterSellerError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(seller_id = %seller.id, "Seller registered");
        Ok(seller.to_profile())
    }
}
