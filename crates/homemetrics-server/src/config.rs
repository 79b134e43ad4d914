//! Runtime configuration loaded from the environment.

use homemetrics_auth::AuthConfig;
use thiserror::Error;

/// Signing secret for bearer tokens. Required.
pub const JWT_SECRET_VAR: &str = "HOMEMETRICS_JWT_SECRET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup(JWT_SECRET_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing(JWT_SECRET_VAR))?;

        Ok(Self {
            auth: AuthConfig::with_secret(secret),
        })
    }
}
