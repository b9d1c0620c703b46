use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::seller::application::ports::incoming::use_cases::{
    SellerLoginCommand, SellerLoginError, SellerLoginResult, SellerLoginUseCase,
};
use crate::seller::application::ports::outgoing::SellerRepository;

pub struct SellerLoginService<R>
where
    R: SellerRepository,
{
    seller_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> SellerLoginService<R>
where
    R: SellerRepository,
{
    pub fn new(
        seller_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            seller_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> SellerLoginUseCase for SellerLoginService<R>
where
    R: SellerRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SellerLoginCommand,
    ) -> Result<SellerLoginResult, SellerLoginError> {
        let seller = self
            .seller_repository
            .find_by_email(command.email())
            .await
            .map_err(|e| SellerLoginError::RepositoryError(e.to_string()))?
            .ok_or(SellerLoginError::InvalidCredentials)?;

        let valid = self
            .password_hasher
            .verify_password(command.password(), &seller.password_hash)
            .await
            .map_err(|e| SellerLoginError::PasswordVerificationFailed(e.to_string()))?;

        if !valid {
            return Err(SellerLoginError::InvalidCredentials);
        }

        if seller.is_deleted {
            return Err(SellerLoginError::AccountDeleted);
        }

        let token = self
            .token_provider
            .generate_access_token(seller.id, Role::Seller)
            .map_err(|e| SellerLoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(SellerLoginResult {
            token,
            role: Role::Seller,
            is_active: seller.is_active,
            seller: seller.to_profile(),
        })
    }
}
