use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::entities::Role;
use crate::seller::application::domain::entities::SellerProfile;

#[derive(Debug, Clone)]
pub struct SellerLoginCommand {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SellerLoginCommandError {
    #[error("Email and password are required")]
    MissingCredentials,
}

impl SellerLoginCommand {
    pub fn new(email: String, password: String) -> Result<Self, SellerLoginCommandError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || password.is_empty() {
            return Err(SellerLoginCommandError::MissingCredentials);
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

#[derive(Debug, Clone, Serialize)]
pub struct SellerLoginResult {
    pub token: String,
    pub role: Role,
    pub is_active: bool,
    pub seller: SellerProfile,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerLoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Seller account deleted")]
    AccountDeleted,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SellerLoginUseCase: Send + Sync {
    async fn execute(
        &self,
        command: SellerLoginCommand,
    ) -> Result<SellerLoginResult, SellerLoginError>;
}
