use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    AdminProfile, SeedAdminCommand, SeedAdminError, SeedAdminOutcome, SeedAdminUseCase,
};
use crate::auth::application::ports::outgoing::{
    AdminRepository, AdminRepositoryError, NewAdminData, PasswordHasher,
};

pub struct SeedAdminService<R>
where
    R: AdminRepository,
{
    admin_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> SeedAdminService<R>
where
    R: AdminRepository,
{
    pub fn new(admin_repository: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            admin_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> SeedAdminUseCase for SeedAdminService<R>
where
    R: AdminRepository + Send + Sync,
{
    async fn execute(&self, command: SeedAdminCommand) -> Result<SeedAdminOutcome, SeedAdminError> {
        let existing = self
            .admin_repository
            .count()
            .await
            .map_err(|e| SeedAdminError::RepositoryError(e.to_string()))?;

        if existing > 0 {
            return Ok(SeedAdminOutcome::Skipped);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| SeedAdminError::HashingFailed(e.to_string()))?;

        let result = self
            .admin_repository
            .create(NewAdminData {
                email: command.email.trim().to_lowercase(),
                name: command.name,
                password_hash,
            })
            .await;

        match result {
            Ok(admin) => {
                tracing::info!(admin_id = %admin.id, email = %admin.email, "Seeded admin account");
                Ok(SeedAdminOutcome::Created(AdminProfile {
                    id: admin.id,
                    email: admin.email,
                    name: admin.name,
                }))
            }
            // Another instance seeded first
            Err(AdminRepositoryError::AdminAlreadyExists) => Ok(SeedAdminOutcome::Skipped),
            Err(e) => Err(SeedAdminError::RepositoryError(e.to_string())),
        }
    }
}
