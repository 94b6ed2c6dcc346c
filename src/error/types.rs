/**
 * API Error Types
 *
 * This module defines the error taxonomy used by both services:
 *
 * - `Validation` - malformed or missing input (400)
 * - `Authentication` - missing, invalid, or expired credential (401)
 * - `NotFound` - a referenced entity is absent (404)
 * - `Database` / `Hash` / `Token` - unexpected runtime failures (500)
 *
 * Handlers construct the first three variants explicitly; the 500-class
 * variants arrive through `?` via the `#[from]` conversions.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error type returned by every handler in both services
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Missing, invalid, or expired credential
    #[error("{0}")]
    Authentication(String),

    /// Referenced entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuance failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an authentication error (401)
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create a not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the message exposed to the caller
    ///
    /// 500-class errors collapse to a generic message; the concrete cause
    /// is only recorded for operators at the response boundary.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Authentication(message)
            | Self::NotFound(message) => message.clone(),
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                "Internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad input").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::authentication("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_passthrough() {
        let err = ApiError::validation("Message must not be empty");
        assert_eq!(err.public_message(), "Message must not be empty");
    }

    #[test]
    fn test_internal_cause_is_not_exposed() {
        let err = ApiError::from(sqlx::Error::PoolClosed);
        assert_eq!(err.public_message(), "Internal server error");
        // The Display impl still carries the cause for operator logs.
        assert!(err.to_string().contains("database error"));
    }
}
