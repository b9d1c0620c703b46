use chrono::Utc;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

/// Token provider that accepts any bearer token and resolves it to a fixed
/// account, or rejects everything.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    account: Option<(Uuid, Role)>,
}

impl StubTokenProvider {
    pub fn new(account_id: Uuid, role: Role) -> Self {
        Self {
            account: Some((account_id, role)),
        }
    }

    pub fn rejecting() -> Self {
        Self { account: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _account_id: Uuid, role: Role) -> Result<String, TokenError> {
        Ok(format!("{role}-token"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let (sub, role) = self.account.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            role,
            iss: "estate-test".to_string(),
            exp: now + 3600,
            iat: now,
            nbf: now,
        })
    }
}
