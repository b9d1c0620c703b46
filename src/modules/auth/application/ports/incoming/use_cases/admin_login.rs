use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct AdminLoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminLoginCommandError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl AdminLoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, AdminLoginCommandError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AdminLoginCommandError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(AdminLoginCommandError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Result / Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct AdminProfile {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginResult {
    pub token: String,
    pub role: Role,
    pub admin: AdminProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AdminLoginUseCase: Send + Sync {
    async fn execute(&self, command: AdminLoginCommand)
        -> Result<AdminLoginResult, AdminLoginError>;
}
