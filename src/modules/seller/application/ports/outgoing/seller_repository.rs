use async_trait::async_trait;
use uuid::Uuid;

use crate::seller::application::domain::entities::Seller;
use crate::shared::patch::PatchField;

#[derive(Debug, Clone)]
pub struct NewSellerData {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub company: Option<String>,
    pub phone: String,
    pub city: String,
    pub pincode: String,
    pub is_active: bool,
}

/// Partial update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SellerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub company: PatchField<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
    pub is_active: Option<bool>,
}

impl SellerChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.company.is_unset()
            && self.phone.is_none()
            && self.city.is_none()
            && self.pincode.is_none()
            && self.is_active.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SellerRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Seller not found")]
    NotFound,

    #[error("Email already registered")]
    EmailAlreadyExists,
}

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Seller>, SellerRepositoryError>;

    async fn create(&self, data: NewSellerData) -> Result<Seller, SellerRepositoryError>;

    async fn update(&self, id: Uuid, changes: SellerChanges)
        -> Result<Seller, SellerRepositoryError>;

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Seller, SellerRepositoryError>;

    /// Marks the seller deleted and inactive, and soft-deletes every listing
    /// they own, in one transaction. Returns the number of listings touched.
    async fn soft_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError>;

    /// Removes the seller and all their listings in one transaction.
    /// Returns the number of listings removed.
    async fn hard_delete(&self, id: Uuid) -> Result<u64, SellerRepositoryError>;

    /// Reactivates a soft-deleted seller and brings back listings that were
    /// removed along with them.
    async fn restore(&self, id: Uuid) -> Result<Seller, SellerRepositoryError>;
}
