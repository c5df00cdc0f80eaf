//! Repository error types
//!
//! The gateway reports what went wrong and during which operation, but never
//! decides the HTTP status. That mapping belongs to the service layer.
//!
//! # Example
//!
//! ```rust
//! use movie_service::repository::{RepositoryError, RepositoryErrorKind};
//!
//! let error = RepositoryError::invalid_id("not a key!");
//! assert!(matches!(error.kind, RepositoryErrorKind::InvalidId));
//! assert_eq!(error.entity_id.as_deref(), Some("not a key!"));
//! ```

use std::fmt;

use crate::models::ValidationError;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Fetching one page of records
    List,
    /// Fetching every record
    FindAll,
    /// Finding a single record by ID
    FindById,
    /// Inserting a new record
    Create,
    /// Updating an existing record
    Update,
    /// Deleting a record
    Delete,
    /// Preparing the collection at startup
    Initialize,
    /// Probing store connectivity
    Ping,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::FindAll => write!(f, "find_all"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
            Self::Initialize => write!(f, "initialize"),
            Self::Ping => write!(f, "ping"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Candidate record failed schema validation; nothing was written
    ValidationFailed,
    /// The identifier is not a valid key for the store
    InvalidId,
    /// The store did not return the record it was asked to write
    NotPersisted,
    /// Failed to reach the store
    ConnectionFailed,
    /// Store operation timed out
    Timeout,
    /// Store rejected or failed the query
    DatabaseError,
    /// Stored data could not be decoded
    SerializationError,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::InvalidId => write!(f, "invalid_id"),
            Self::NotPersisted => write!(f, "not_persisted"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::SerializationError => write!(f, "serialization_error"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message, passed through unchanged from the store
    pub message: String,
    /// The ID of the record involved
    pub entity_id: Option<String>,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Create a validation failed error from the schema validator's report
    pub fn validation_failed(operation: RepositoryOperation, error: &ValidationError) -> Self {
        Self::new(
            operation,
            RepositoryErrorKind::ValidationFailed,
            error.to_string(),
        )
    }

    /// Create an invalid identifier error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            operation: RepositoryOperation::FindById,
            kind: RepositoryErrorKind::InvalidId,
            message: format!("Cast to record id failed for value \"{id}\""),
            entity_id: Some(id),
        }
    }

    /// Create an error for a write the store acknowledged but did not return
    pub fn not_persisted(operation: RepositoryOperation, id: impl Into<String>) -> Self {
        Self::new(
            operation,
            RepositoryErrorKind::NotPersisted,
            "Store returned no record after write",
        )
        .with_entity(id)
    }

    /// Create a database error
    pub fn database_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::DatabaseError, message)
    }

    /// Categorize a SurrealDB error by its message
    pub fn from_store(operation: RepositoryOperation, err: &surrealdb::Error) -> Self {
        let msg = err.to_string();
        let lower = msg.to_lowercase();

        let kind = if lower.contains("timeout") || lower.contains("timed out") {
            RepositoryErrorKind::Timeout
        } else if lower.contains("connect")
            || lower.contains("connection")
            || lower.contains("signin")
            || lower.contains("auth")
        {
            RepositoryErrorKind::ConnectionFailed
        } else if lower.contains("deserializ")
            || lower.contains("serializ")
            || lower.contains("invalid type")
        {
            RepositoryErrorKind::SerializationError
        } else {
            RepositoryErrorKind::DatabaseError
        };

        Self::new(operation, kind, msg)
    }

    /// Add the record ID to an existing error
    #[must_use]
    pub fn with_entity(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Whether the failure came from schema validation
    #[must_use]
    pub fn is_validation(&self) -> bool {
        self.kind == RepositoryErrorKind::ValidationFailed
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref id) = self.entity_id {
            write!(f, " [Movie: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}
