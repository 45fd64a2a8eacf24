//! Error types for the courses API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{CourseId, ErrorResponse};

// == Course Error Enum ==
/// Unified error type for the courses API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    /// No course with the given id
    #[error("No course with id: {0}")]
    NotFound(CourseId),

    /// Path id that is not an integer; no course can match it
    #[error("No course with id: {0}")]
    UnknownId(String),

    /// Payload absent or a required field missing
    #[error("{message}")]
    InvalidInput {
        message: String,
        fields: Vec<String>,
    },

    /// Rejected creation under strict validation
    #[error("{message}")]
    PreconditionFailed {
        message: String,
        fields: Vec<String>,
    },
}

impl CourseError {
    /// Builds an `InvalidInput` error naming the violated fields.
    pub fn invalid(message: impl Into<String>, fields: Vec<String>) -> Self {
        CourseError::InvalidInput {
            message: message.into(),
            fields,
        }
    }

    /// Escalates an `InvalidInput` to `PreconditionFailed`.
    ///
    /// Other variants pass through unchanged.
    pub fn into_precondition_failed(self) -> Self {
        match self {
            CourseError::InvalidInput { message, fields } => {
                CourseError::PreconditionFailed { message, fields }
            }
            other => other,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            CourseError::NotFound(_) | CourseError::UnknownId(_) => StatusCode::NOT_FOUND,
            CourseError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            CourseError::PreconditionFailed { .. } => StatusCode::PRECONDITION_FAILED,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            CourseError::NotFound(id) => ErrorResponse::new(format!("No course with id: {}", id)),
            CourseError::UnknownId(raw) => ErrorResponse::new(format!("No course with id: {}", raw)),
            CourseError::InvalidInput { message, fields }
            | CourseError::PreconditionFailed { message, fields } => {
                ErrorResponse::with_fields(message, fields)
            }
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the courses API.
pub type Result<T> = std::result::Result<T, CourseError>;
