use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;
use uuid::Uuid;

use crate::auth::application::domain::entities::Role;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, account_id: Uuid, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: account_id,
            role,
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::InvalidIssuer
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_0123456789";

    fn config_with_expiry(expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            issuer: "test_issuer".to_string(),
            access_token_expiry: expiry,
        }
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(config_with_expiry(3600))
    }

    #[test]
    fn test_generate_and_verify_admin_token() {
        let service = create_test_jwt_service();
        let admin_id = Uuid::new_v4();

        let token = service
            .generate_access_token(admin_id, Role::Admin)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, admin_id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_seller_role_is_preserved() {
        let service = create_test_jwt_service();
        let seller_id = Uuid::new_v4();

        let token = service.generate_access_token(seller_id, Role::Seller).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, seller_id);
        assert_eq!(claims.role, Role::Seller);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        let result = service.verify_token("invalid.jwt.token");

        assert!(matches!(result, Err(TokenError::MalformedToken)));
    }

    #[test]
    fn test_expired_token() {
        // Already expired beyond the 30s leeway
        let service = JwtTokenService::new(config_with_expiry(-35));

        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Seller)
            .unwrap();

        let result = service.verify_token(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{}_DIFFERENT", TEST_SECRET),
            issuer: "test_issuer".to_string(),
            access_token_expiry: 3600,
        });

        let result = other.verify_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_foreign_issuer_is_rejected() {
        let service = create_test_jwt_service();
        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Admin)
            .unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: TEST_SECRET.to_string(),
            issuer: "someone_else".to_string(),
            access_token_expiry: 3600,
        });

        let result = other.verify_token(&token);
        assert!(matches!(result, Err(TokenError::InvalidIssuer)));
    }

    #[test]
    fn test_tampered_token_fails() {
        let service = create_test_jwt_service();
        let mut token = service
            .generate_access_token(Uuid::new_v4(), Role::Seller)
            .unwrap();
        token.push('x');

        assert!(service.verify_token(&token).is_err());
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();

        let token = service
            .generate_access_token(Uuid::new_v4(), Role::Seller)
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now, "Expiry should be in the future");
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }

    #[test]
    fn test_jwt_error_display() {
        assert_eq!(format!("{}", TokenError::TokenExpired), "Token has expired");
        assert_eq!(
            format!("{}", TokenError::InvalidSignature),
            "Invalid token signature"
        );
        assert_eq!(format!("{}", TokenError::MalformedToken), "Malformed token");
        assert_eq!(
            format!("{}", TokenError::EncodingError("boom".to_string())),
            "Token encoding error: boom"
        );
    }

    #[test]
    fn test_jwt_service_debug() {
        let service = create_test_jwt_service();
        assert!(format!("{:?}", service).contains("JwtService"));
    }
}
