use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "estate-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
    })
}

/// Token provider in the shape the auth extractors read from app data.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(create_test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for the given account.
pub fn bearer(account_id: Uuid, role: Role) -> (&'static str, String) {
    let token = create_test_jwt_service()
        .generate_access_token(account_id, role)
        .unwrap();
    ("Authorization", format!("Bearer {token}"))
}
