use async_trait::async_trait;
use email_address::EmailAddress;

use crate::seller::application::domain::entities::SellerProfile;

/// Admin-side seller creation. Sellers created this way default to active.
#[derive(Debug, Clone)]
pub struct CreateSellerCommand {
    name: String,
    email: String,
    password: String,
    company: Option<String>,
    phone: String,
    city: String,
    pincode: String,
    is_active: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateSellerCommandError {
    #[error("Name, email and password are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl CreateSellerCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        password: String,
        company: Option<String>,
        phone: Option<String>,
        city: Option<String>,
        pincode: Option<String>,
        is_active: Option<bool>,
    ) -> Result<Self, CreateSellerCommandError> {
        let name = name.trim().to_string();
        let email = email.trim().to_lowercase();

        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(CreateSellerCommandError::MissingFields);
        }

        if !EmailAddress::is_valid(&email) {
            return Err(CreateSellerCommandError::InvalidEmail);
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
            is_active: is_active.unwrap_or(true),
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

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSellerError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSellerUseCase: Send + Sync {
    async fn execute(&self, command: CreateSellerCommand)
        -> Result<SellerProfile, CreateSellerError>;
}
