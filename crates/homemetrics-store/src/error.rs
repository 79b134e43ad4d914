//! Store-specific error types and conversions.

use homemetrics_core::error::HomeError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Duplicate key for {entity}: {key}")]
    Conflict { entity: &'static str, key: String },
}

impl From<StoreError> for HomeError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => HomeError::NotFound {
                entity: entity.into(),
                id,
            },
            StoreError::Conflict { entity, key } => HomeError::AlreadyExists {
                entity: entity.into(),
                key,
            },
        }
    }
}
