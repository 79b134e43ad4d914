//! Bearer token issuance and validation (HS256 JWT).
//!
//! Expiry is checked here against an explicit clock instead of inside
//! `jsonwebtoken`, with no leeway and at full clock precision: a token
//! is accepted while `now <= exp` and rejected once `now > exp`, even by
//! a millisecond.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use homemetrics_core::models::user::User;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Scheme expected in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// JWT claims embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID string).
    pub user_id: String,
    pub username: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

fn secret(config: &AuthConfig) -> Result<&[u8], AuthError> {
    if config.jwt_secret.is_empty() {
        return Err(AuthError::Crypto("JWT signing secret is not configured".into()));
    }
    Ok(config.jwt_secret.as_bytes())
}

/// Issue a signed token for `user`, valid for the configured lifetime.
pub fn issue_token(user: &User, config: &AuthConfig) -> Result<String, AuthError> {
    issue_token_at(user, Utc::now(), config)
}

/// Issue a token as if the current time were `now`.
pub fn issue_token_at(
    user: &User,
    now: DateTime<Utc>,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let key = EncodingKey::from_secret(secret(config)?);
    // Claims carry whole seconds; `exp` is exactly `iat` plus the lifetime.
    let issued = now.trunc_subsecs(0);
    let expires = i64::try_from(config.token_lifetime_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|lifetime| issued.checked_add_signed(lifetime))
        .ok_or_else(|| {
            AuthError::Crypto(format!(
                "token lifetime of {}s is out of range",
                config.token_lifetime_secs
            ))
        })?;
    let claims = Claims {
        user_id: user.id.to_string(),
        username: user.username.clone(),
        iat: issued.timestamp(),
        exp: expires.timestamp(),
    };

    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Verify the signature and structure of `token` and check its
/// expiry against `now`.
pub fn decode_token_at(
    token: &str,
    now: DateTime<Utc>,
    config: &AuthConfig,
) -> Result<Claims, AuthError> {
    let key = DecodingKey::from_secret(secret(config)?);

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let claims = jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::TokenInvalid(e.to_string()))?;

    if claims.expires_at().is_none_or(|exp| now > exp) {
        return Err(AuthError::TokenExpired);
    }
    Ok(claims)
}

/// Extract the token from a raw `Authorization` header value.
///
/// The header must be exactly `Bearer <token>`: one space, two parts.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(h) if !h.is_empty() => h,
        _ => return Err(AuthError::MissingCredentials),
    };

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Validate a raw `Authorization` header and return the verified claims.
///
/// This is the entry point for request-level authentication. It is
/// purely stateless: no store lookup is performed.
pub fn validate(header: Option<&str>, config: &AuthConfig) -> Result<Claims, AuthError> {
    validate_at(header, Utc::now(), config)
}

pub fn validate_at(
    header: Option<&str>,
    now: DateTime<Utc>,
    config: &AuthConfig,
) -> Result<Claims, AuthError> {
    let token = parse_bearer(header)?;
    decode_token_at(token, now, config)
}
