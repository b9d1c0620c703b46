use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

/// Identity summary returned by `GET /api/auth/me`
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAccount {
    pub id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetCurrentAccountError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCurrentAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        role: Role,
    ) -> Result<CurrentAccount, GetCurrentAccountError>;
}
