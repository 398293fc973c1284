//! Post Error Types
//!
//! This module provides post-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Post-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Post-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Title or content missing from the request body
    #[error("Title and content are required")]
    MissingFields,

    /// Mutation targeted a post id that does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Authorization header absent or without a token segment
    #[error("Token not provided")]
    TokenMissing,

    /// Token present but signature invalid or expired
    #[error("Invalid token")]
    TokenRejected,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PostError::MissingFields => StatusCode::BAD_REQUEST,
            PostError::PostNotFound => StatusCode::NOT_FOUND,
            PostError::TokenMissing => StatusCode::UNAUTHORIZED,
            PostError::TokenRejected => StatusCode::FORBIDDEN,
            PostError::Database(_) | PostError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::MissingFields => ErrorKind::BadRequest,
            PostError::PostNotFound => ErrorKind::NotFound,
            PostError::TokenMissing => ErrorKind::Unauthorized,
            PostError::TokenRejected => ErrorKind::Forbidden,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; details stay in the logs.
    pub fn to_app_error(&self) -> AppError {
        match self {
            PostError::Database(_) | PostError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::TokenRejected => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl IntoResponse for PostError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
