use crate::server::error::{config::ConfigError, Error};

pub const DEFAULT_JWT_AUDIENCE: &str = "authenticated";

/// Server configuration read from the environment.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub auth_token_url: String,
    pub auth_client_id: String,
    pub auth_client_secret: Option<String>,
    pub auth_jwt_secret: String,
    pub auth_jwt_audience: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_source(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable lookup
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and non-empty
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but empty
    pub fn from_source<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: required(&lookup, "DATABASE_URL")?,
            valkey_url: required(&lookup, "VALKEY_URL")?,
            auth_token_url: required(&lookup, "AUTH_TOKEN_URL")?,
            auth_client_id: required(&lookup, "AUTH_CLIENT_ID")?,
            auth_client_secret: optional(&lookup, "AUTH_CLIENT_SECRET")?,
            auth_jwt_secret: required(&lookup, "AUTH_JWT_SECRET")?,
            auth_jwt_audience: optional(&lookup, "AUTH_JWT_AUDIENCE")?
                .unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string()),
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, var)?.ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional<F>(lookup: &F, var: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Some(value) => Ok(Some(value)),
    }
}
