//! API error types for handler operations
//!
//! Every failed request ends as an [`ApiError`]. Its kind alone decides the
//! HTTP status, and the response body is always `{"message": "..."}`.
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use movie_service::service::{ApiError, ApiErrorKind, ApiOperation};
//!
//! let error = ApiError::not_found(ApiOperation::Get, "Movie not found with id: 42");
//! assert!(matches!(error.kind, ApiErrorKind::NotFound));
//! assert_eq!(error.kind.status_code(), StatusCode::NOT_FOUND);
//! ```

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::repository::RepositoryError;

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Listing one page of movies
    List,
    /// Listing every movie
    GetAll,
    /// Getting a single movie by ID
    Get,
    /// Creating a new movie
    Create,
    /// Updating an existing movie
    Update,
    /// Deleting a movie
    Delete,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::GetAll => write!(f, "get_all"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Input failed schema validation or could not be parsed
    ValidationFailed,
    /// The request could not be carried out as asked
    BadRequest,
    /// No record matched
    NotFound,
    /// The store failed or rejected the operation
    StoreFailure,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::BadRequest => write!(f, "bad_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::StoreFailure => write!(f, "store_failure"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed | Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Message returned to the client
    pub message: String,
    /// The ID of the movie involved
    pub entity_id: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_id: None,
        }
    }

    /// Create a "not found" error
    pub fn not_found(operation: ApiOperation, message: impl Into<String>) -> Self {
        Self::new(operation, ApiErrorKind::NotFound, message)
    }

    /// Create a validation failed error
    pub fn validation_failed(operation: ApiOperation, message: impl Into<String>) -> Self {
        Self::new(operation, ApiErrorKind::ValidationFailed, message)
    }

    /// Create a bad request error
    pub fn bad_request(operation: ApiOperation, message: impl Into<String>) -> Self {
        Self::new(operation, ApiErrorKind::BadRequest, message)
    }

    /// Wrap a gateway failure, keeping the store's message as-is
    ///
    /// Validation failures stay 400; everything else is a store failure.
    pub fn from_repository(operation: ApiOperation, err: RepositoryError) -> Self {
        let kind = if err.is_validation() {
            ApiErrorKind::ValidationFailed
        } else {
            ApiErrorKind::StoreFailure
        };

        Self {
            operation,
            kind,
            message: err.message,
            entity_id: err.entity_id,
        }
    }

    /// Map an axum JSON body rejection to a validation failure
    pub fn from_rejection(operation: ApiOperation, rejection: JsonRejection) -> Self {
        Self::validation_failed(operation, rejection.body_text())
    }

    /// Add the movie ID to an existing error
    #[must_use]
    pub fn with_entity(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref id) = self.entity_id {
            write!(f, " [Movie: {}]", id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();

        if status.is_server_error() {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                movie_id = ?self.entity_id,
                "API error: {}", self.message
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                kind = %self.kind,
                movie_id = ?self.entity_id,
                "API error: {}", self.message
            );
        }

        (
            status,
            Json(ErrorBody {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use crate::repository::{RepositoryErrorKind, RepositoryOperation};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiErrorKind::ValidationFailed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiErrorKind::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiErrorKind::StoreFailure.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_repository_error_stays_400() {
        let mut report = ValidationError::new("Movie");
        report.add_field_error("title", "REQUIRED", "Path `title` is required.");
        let repo_err = RepositoryError::validation_failed(RepositoryOperation::Create, &report);

        let error = ApiError::from_repository(ApiOperation::Create, repo_err);
        assert_eq!(error.kind, ApiErrorKind::ValidationFailed);
        assert_eq!(
            error.message,
            "Movie validation failed: title: Path `title` is required."
        );
    }

    #[test]
    fn test_store_message_passes_through() {
        let repo_err = RepositoryError::new(
            RepositoryOperation::FindById,
            RepositoryErrorKind::ConnectionFailed,
            "connection refused",
        );
        let error = ApiError::from_repository(ApiOperation::Get, repo_err);
        assert_eq!(error.kind, ApiErrorKind::StoreFailure);
        assert_eq!(error.message, "connection refused");

        let invalid = ApiError::from_repository(ApiOperation::Get, RepositoryError::invalid_id("a b"));
        assert_eq!(invalid.kind, ApiErrorKind::StoreFailure);
        assert_eq!(invalid.entity_id.as_deref(), Some("a b"));
    }

    #[test]
    fn test_display() {
        let error = ApiError::not_found(ApiOperation::Delete, "Movie can't Deleted : 1").with_entity("1");
        assert_eq!(
            error.to_string(),
            "API not_found error during delete: Movie can't Deleted : 1 [Movie: 1]"
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = ApiError::not_found(ApiOperation::Get, "Movie not found with id: x").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Movie not found with id: x" }));
    }
}
