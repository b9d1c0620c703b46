use async_trait::async_trait;

use super::AdminProfile;

#[derive(Debug, Clone)]
pub struct SeedAdminCommand {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub enum SeedAdminOutcome {
    Created(AdminProfile),
    /// At least one admin already exists
    Skipped,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedAdminError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Creates the first admin account when none exists.
#[async_trait]
pub trait SeedAdminUseCase: Send + Sync {
    async fn execute(&self, command: SeedAdminCommand)
        -> Result<SeedAdminOutcome, SeedAdminError>;
}
