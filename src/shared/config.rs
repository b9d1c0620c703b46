use std::env;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(String),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: String, value: String },

    #[error("{0}")]
    Constraint(String),
}

/// Reads a variable through the given lookup, treating blank values as absent.
pub(crate) fn lookup_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn require_var<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_var(lookup, key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

pub(crate) fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup_var(lookup, key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: raw,
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminSeedConfig {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MailTransportConfig {
    /// Authenticated relay (production)
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local SMTP (Mailpit, MailHog)
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MailConfig {
    pub from_email: String,
    pub admin_email: String,
    pub transport: MailTransportConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub rust_env: String,
    pub run_migrations: bool,
    pub cors_origins: Vec<String>,
    pub admin_seed: Option<AdminSeedConfig>,
    pub mail: Option<MailConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = require_var(&lookup, "DATABASE_URL")?;
        let host = lookup_var(&lookup, "HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_var(&lookup, "PORT", 5000u16)?;
        let rust_env =
            lookup_var(&lookup, "RUST_ENV").unwrap_or_else(|| "development".to_string());
        let run_migrations = parse_var(&lookup, "RUN_MIGRATIONS", false)?;

        let cors_origins = lookup_var(&lookup, "CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().trim_end_matches('/').to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]);

        let admin_seed = match (
            lookup_var(&lookup, "ADMIN_SEED_EMAIL"),
            lookup_var(&lookup, "ADMIN_SEED_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(AdminSeedConfig {
                email: email.to_lowercase(),
                password,
                name: lookup_var(&lookup, "ADMIN_SEED_NAME")
                    .unwrap_or_else(|| "Administrator".to_string()),
            }),
            _ => None,
        };

        let mail = Self::mail_from_lookup(&lookup, &rust_env)?;

        Ok(Self {
            database_url,
            host,
            port,
            rust_env,
            run_migrations,
            cors_origins,
            admin_seed,
            mail,
        })
    }

    fn mail_from_lookup<F>(lookup: &F, rust_env: &str) -> Result<Option<MailConfig>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Notifications are opt-in
        let Some(from_email) = lookup_var(lookup, "EMAIL_FROM") else {
            return Ok(None);
        };

        let admin_email = lookup_var(lookup, "ADMIN_EMAIL").unwrap_or_else(|| from_email.clone());

        let transport = if rust_env == "test" {
            MailTransportConfig::Local {
                host: lookup_var(lookup, "SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_var(lookup, "SMTP_PORT", 1025u16)?,
            }
        } else {
            MailTransportConfig::Relay {
                server: require_var(lookup, "SMTP_SERVER")?,
                username: require_var(lookup, "SMTP_USERNAME")?,
                password: require_var(lookup, "SMTP_PASSWORD")?,
            }
        };

        Ok(Some(MailConfig {
            from_email,
            admin_email,
            transport,
        }))
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.rust_env == "production"
    }
}
