//! Authentication error types.

use homemetrics_core::error::HomeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is missing")]
    MissingCredentials,

    #[error("authorization header must have the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for HomeError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials
            | AuthError::MalformedHeader
            | AuthError::InvalidCredentials
            | AuthError::TokenExpired
            | AuthError::TokenInvalid(_) => HomeError::AuthenticationFailed {
                reason: err.to_string(),
            },
            AuthError::Crypto(msg) => HomeError::Internal(msg),
        }
    }
}
