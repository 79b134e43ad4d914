//! Error types for HomeMetrics.
//!
//! Every failure the core can produce is one of these tags. The
//! boundary picks a transport status per variant; the core only
//! picks the variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Entity already exists: {entity} '{key}'")]
    AlreadyExists { entity: String, key: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Authorization denied: {reason}")]
    AuthorizationDenied { reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HomeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn already_exists(entity: &str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            key: key.into(),
        }
    }
}

pub type HomeResult<T> = Result<T, HomeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_entity_and_key() {
        let err = HomeError::already_exists("user", "alice");
        assert_eq!(err.to_string(), "Entity already exists: user 'alice'");

        let err = HomeError::not_found("room", "42");
        assert_eq!(err.to_string(), "Entity not found: room with id 42");
    }
}
