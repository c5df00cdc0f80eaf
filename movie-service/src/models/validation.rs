//! Field-level validation errors
//!
//! A [`ValidationError`] collects every failing field of a candidate record
//! rather than stopping at the first one. Its display form is what clients
//! receive in the `message` of a 400 response.
//!
//! # Example
//!
//! ```rust
//! use movie_service::models::ValidationError;
//!
//! let mut errors = ValidationError::new("Movie");
//! errors.add_field_error("title", "REQUIRED", "Path `title` is required.");
//! assert_eq!(
//!     errors.to_string(),
//!     "Movie validation failed: title: Path `title` is required."
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears on the wire (e.g. `releaseYear`)
    pub field: String,
    /// Error code (`REQUIRED`, `EMPTY`, `MIN`, `MAX`, `INVALID`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Validation failure for a whole record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    entity: String,
    /// Failing fields, in the order they were checked
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty validation error for the given entity name
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            errors: Vec::new(),
        }
    }

    /// Add a field-level error
    pub fn add_field_error(
        &mut self,
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.errors.push(FieldError {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        });
        self
    }

    /// Whether no field has failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether the given field has at least one error
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Err(self)` when any field failed, `Ok(value)` otherwise
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed: ", self.entity)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_converts_to_ok() {
        let errors = ValidationError::new("Movie");
        assert!(errors.is_empty());
        assert_eq!(errors.into_result(7), Ok(7));
    }

    #[test]
    fn test_display_joins_all_fields() {
        let mut errors = ValidationError::new("Movie");
        errors
            .add_field_error("title", "REQUIRED", "Path `title` is required.")
            .add_field_error(
                "rating",
                "MAX",
                "Path `rating` (15) is more than maximum allowed value (10).",
            );

        assert!(errors.has_field("rating"));
        assert!(!errors.has_field("genre"));
        assert_eq!(
            errors.to_string(),
            "Movie validation failed: title: Path `title` is required., \
             rating: Path `rating` (15) is more than maximum allowed value (10)."
        );
    }

    #[test]
    fn test_into_result_err_keeps_fields() {
        let mut errors = ValidationError::new("Movie");
        errors.add_field_error("genre", "EMPTY", "Path `genre` is required.");
        let err = errors.into_result(()).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].code, "EMPTY");
    }
}
