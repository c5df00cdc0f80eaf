//! Startup and infrastructure errors
//!
//! Request-level failures are [`crate::service::ApiError`]; this type covers
//! everything that can stop the service from starting or serving.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type alias for infrastructure operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort startup or serving
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// The store could not be reached or prepared
    #[error("Database error: {0}")]
    Database(String),

    /// The movie gateway failed during setup
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// figment::Error is large; box it to keep Result small
impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::RepositoryOperation;

    #[test]
    fn test_display() {
        let err = Error::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "Database error: connection refused");

        let err: Error =
            RepositoryError::database_error(RepositoryOperation::Initialize, "boom").into();
        assert_eq!(
            err.to_string(),
            "Repository database_error error during initialize: boom"
        );
    }

    #[test]
    fn test_from_io() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
