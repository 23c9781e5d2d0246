use diesel::r2d2::PoolError;
use thiserror::Error;

/// Result type returned by all repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}
