use async_trait::async_trait;
use email_address::EmailAddress;
use uuid::Uuid;

use crate::seller::application::domain::entities::SellerProfile;
use crate::shared::patch::PatchField;

/// Admin-side partial update. A new password is hashed by the service.
#[derive(Debug, Clone, Default)]
pub struct UpdateSellerCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub company: PatchField<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateSellerCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl UpdateSellerCommand {
    /// Trims and checks the provided fields.
    pub fn validated(mut self) -> Result<Self, UpdateSellerCommandError> {
        if let Some(name) = self.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(UpdateSellerCommandError::EmptyName);
            }
        }

        if let Some(email) = self.email.as_mut() {
            *email = email.trim().to_lowercase();
            if !EmailAddress::is_valid(email) {
                return Err(UpdateSellerCommandError::InvalidEmail);
            }
        }

        if matches!(self.password.as_deref(), Some("")) {
            return Err(UpdateSellerCommandError::EmptyPassword);
        }

        self.company = self
            .company
            .map(|c| c.trim().to_string());
        if matches!(self.company.as_value().map(String::as_str), Some("")) {
            self.company = PatchField::Null;
        }

        for field in [&mut self.phone, &mut self.city, &mut self.pincode] {
            if let Some(v) = field.as_mut() {
                *v = v.trim().to_string();
            }
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSellerError {
    #[error("Seller not found")]
    NotFound,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSellerUseCase: Send + Sync {
    async fn execute(
        &self,
        seller_id: Uuid,
        command: UpdateSellerCommand,
    ) -> Result<SellerProfile, UpdateSellerError>;
}
