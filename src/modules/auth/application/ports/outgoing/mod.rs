pub mod admin_repository;
pub mod password_hasher;
pub mod token_provider;

pub use admin_repository::{AdminRepository, AdminRepositoryError, NewAdminData};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
