use std::env;

use crate::shared::config::{lookup_var, parse_var, require_var, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = require_var(&lookup, "JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            ));
        }

        // One day by default
        let access_token_expiry = parse_var(&lookup, "JWT_ACCESS_EXPIRY", 86_400i64)?;

        if access_token_expiry <= 0 || access_token_expiry > 7 * 86_400 {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 604800 seconds (7 days)".to_string(),
            ));
        }

        let issuer = lookup_var(&lookup, "JWT_ISSUER").unwrap_or_else(|| "estate".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn defaults_to_one_day_expiry() {
        let vars = hashmap! { "JWT_SECRET" => SECRET };
        let config = JwtConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();

        assert_eq!(config.access_token_expiry, 86_400);
        assert_eq!(config.issuer, "estate");
    }

    #[test]
    fn short_secret_is_rejected() {
        let vars = hashmap! { "JWT_SECRET" => "too-short" };
        let result = JwtConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert!(matches!(result, Err(ConfigError::Constraint(_))));
    }

    #[test]
    fn missing_secret_is_rejected() {
        let result = JwtConfig::from_lookup(|_| None);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::Missing("JWT_SECRET".to_string())
        );
    }

    #[test]
    fn non_positive_expiry_is_rejected() {
        let vars = hashmap! { "JWT_SECRET" => SECRET, "JWT_ACCESS_EXPIRY" => "0" };
        let result = JwtConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert!(matches!(result, Err(ConfigError::Constraint(_))));
    }
}
