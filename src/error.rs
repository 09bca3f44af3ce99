//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) | Self::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        match &self {
            AppError::Internal(e) => {
                tracing::error!(code = self.error_code(), "Internal error: {:?}", e);
            }
            AppError::Database(e) => {
                tracing::error!(code = self.error_code(), "Database error: {}", e);
            }
            AppError::Configuration(e) => {
                tracing::error!(code = self.error_code(), "Configuration error: {}", e);
            }
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html><title>{code} {reason}</title><h1>{code} {reason}</h1>",
            code = status.as_u16(),
        );

        (status, Html(body)).into_response()
    }
}

// Expected-empty results are read with fetch_optional/fetch_all, so any
// sqlx error reaching this point is a genuine store failure.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
