use async_trait::async_trait;
use email_address::EmailAddress;

use crate::seller::application::domain::entities::SellerProfile;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterSellerCommand {
    name: String,
    email: String,
    password: String,
    company: Option<String>,
    phone: String,
    city: String,
    pincode: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterSellerCommandError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl RegisterSellerCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        password: String,
        confirm_password: String,
        company: Option<String>,
        phone: Option<String>,
        city: Option<String>,
        pincode: Option<String>,
    ) -> Result<Self, RegisterSellerCommandError> {
        let name = name.trim().to_string();
        let email = email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
        {
            return Err(RegisterSellerCommandError::MissingFields);
        }

        if password != confirm_password {
            return Err(RegisterSellerCommandError::PasswordMismatch);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(RegisterSellerCommandError::InvalidEmail);
        }

        Ok(Self {
            name,
            email,
            password,
            company: company
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            phone: phone.unwrap_or_default().trim().to_string(),
            city: city.unwrap_or_default().trim().to_string(),
            pincode: pincode.unwrap_or_default().trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn pincode(&self) -> &str {
        &self.pincode
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterSellerError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RegisterSellerUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RegisterSellerCommand,
    ) -> Result<SellerProfile, RegisterSellerError>;
}
