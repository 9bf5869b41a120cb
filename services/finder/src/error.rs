//! Custom error types for the finder service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures that end a request with a server error.
///
/// Validation failures and lookup misses are views, not errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database error, including constraint violations
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// A view failed to render
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);

        let error_message = match self {
            AppError::Database(DatabaseError::Constraint(_)) => "Database constraint violation",
            AppError::Database(_) => "Database error",
            AppError::Template(_) => "Internal server error",
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Type alias for handler results
pub type AppResult<T> = Result<T, AppError>;
