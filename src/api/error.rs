//! HTTP error payloads and mapping from service errors.
//!
//! Keep the service layer free of transport concerns by translating
//! [`TodoServiceError`] into Actix responses here. Business errors propagate
//! unmodified from the service; this module only chooses the status code and
//! the structured body.

use crate::todo::services::TodoServiceError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Stable machine-readable error codes exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The supplied status string does not match a known value.
    InvalidStatus,
    /// The referenced todo does not exist.
    TaskNotFound,
    /// Persistence did not yield a usable result after creation.
    UnableToCreate,
    /// Unexpected server-side failure.
    Internal,
}

/// Standard error envelope returned by HTTP handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

impl ApiError {
    /// Constructs an error envelope.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    const fn to_status_code(&self) -> StatusCode {
        match self.code {
            ErrorCode::InvalidStatus => StatusCode::BAD_REQUEST,
            ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            ErrorCode::UnableToCreate | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::InvalidStatus => {
                Self::new(ErrorCode::InvalidStatus, err.to_string())
            }
            TodoServiceError::NotFound => Self::new(ErrorCode::TaskNotFound, err.to_string()),
            TodoServiceError::CreateFailed => {
                Self::new(ErrorCode::UnableToCreate, err.to_string())
            }
            TodoServiceError::Repository(repository_err) => {
                error!(error = %repository_err, "repository failure promoted to API error");
                Self::new(ErrorCode::Internal, "Internal server error")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_status_code()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
