use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::incoming::use_cases::{
    AdminLoginCommand, AdminLoginError, AdminLoginResult, AdminLoginUseCase, AdminProfile,
};
use crate::auth::application::ports::outgoing::{AdminRepository, PasswordHasher, TokenProvider};

pub struct AdminLoginService<R>
where
    R: AdminRepository,
{
    admin_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> AdminLoginService<R>
where
    R: AdminRepository,
{
    pub fn new(
        admin_repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            admin_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> AdminLoginUseCase for AdminLoginService<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, command: AdminLoginCommand) -> Result<AdminLoginResult, AdminLoginError> {
        let admin = self
            .admin_repository
            .find_by_email(command.email())
            .await
            .map_err(|e| AdminLoginError::RepositoryError(e.to_string()))?
            .ok_or(AdminLoginError::InvalidCredentials)?;

        let valid = self
            .password_hasher
            .verify_password(command.password(), &admin.password_hash)
            .await
            .map_err(|e| AdminLoginError::PasswordVerificationFailed(e.to_string()))?;

        if !valid {
            tracing::warn!(email = %command.email(), "Admin login rejected");
            return Err(AdminLoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(admin.id, Role::Admin)
            .map_err(|e| AdminLoginError::TokenGenerationFailed(e.to_string()))?;

        tracing::info!(admin_id = %admin.id, "Admin logged in");

        Ok(AdminLoginResult {
            token,
            role: Role::Admin,
            admin: AdminProfile {
                id: admin.id,
                email: admin.email,
                name: admin.name,
            },
        })
    }
}
