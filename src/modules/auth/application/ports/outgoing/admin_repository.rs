use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Admin;

#[derive(Debug, Clone)]
pub struct NewAdminData {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Admin already exists")]
    AdminAlreadyExists,
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AdminRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AdminRepositoryError>;

    async fn count(&self) -> Result<u64, AdminRepositoryError>;

    async fn create(&self, data: NewAdminData) -> Result<Admin, AdminRepositoryError>;
}
