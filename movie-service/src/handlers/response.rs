//! Response types for movie handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Confirmation body for writes: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome
    pub message: String,
    #[serde(skip)]
    status: StatusCode,
}

impl MessageResponse {
    /// A 200 response with the given message
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::OK,
        }
    }

    /// A 201 response with the given message
    pub fn created(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: StatusCode::CREATED,
        }
    }

    /// The status this response will be sent with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(MessageResponse::ok("done").status_code(), StatusCode::OK);
        assert_eq!(
            MessageResponse::created("done").status_code(),
            StatusCode::CREATED
        );
    }

    #[test]
    fn test_body_has_only_message() {
        let json = serde_json::to_value(MessageResponse::created("Movie created successfully")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Movie created successfully" }));
    }
}
