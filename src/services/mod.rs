use thiserror::Error;

use crate::repository::RepositoryError;

pub mod catalog;
pub mod orders;
pub mod products;
pub mod settings;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested resource does not exist.
    #[error("resource not found")]
    NotFound,
    /// The submitted payload failed validation.
    #[error("validation failed: {0}")]
    Form(String),
    /// Any other storage failure.
    #[error(transparent)]
    Repository(RepositoryError),
}

/// Result type returned by service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}
