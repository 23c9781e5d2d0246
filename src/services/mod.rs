use thiserror::Error;

use crate::repository::errors::RepositoryError;
use crate::storage::StorageError;

pub mod categories;
pub mod images;
pub mod products;
pub mod tags;
pub mod validation;

/// Result type returned by all service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// User-visible failure categories surfaced to the transport layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("record not found")]
    NotFound,
    #[error("{0} already exists")]
    DuplicateName(String),
    #[error("{0}")]
    MissingReference(String),
    #[error("{0}")]
    Form(String),
    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
