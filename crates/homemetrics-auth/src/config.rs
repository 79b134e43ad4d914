//! Authentication configuration.

/// Configuration for token issuance and validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide HMAC-SHA256 signing secret. Must be supplied by
    /// the environment; an empty secret refuses to sign or verify.
    pub jwt_secret: String,
    /// Token lifetime in seconds (default: 86_400 = 24 hours).
    pub token_lifetime_secs: u64,
}

impl AuthConfig {
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_lifetime_secs: 86_400,
        }
    }
}
