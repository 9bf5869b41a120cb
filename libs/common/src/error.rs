//! Custom error types for the common library
//!
//! This module defines the storage error taxonomy shared by every service
//! that talks to the registry database.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred while opening the store or acquiring a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// A uniqueness constraint rejected the write
    #[error("Database constraint violation: {0}")]
    Constraint(String),

    /// Error occurred while creating the schema
    #[error("Database schema error: {0}")]
    Schema(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

impl DatabaseError {
    /// Classify a failed statement, separating uniqueness violations from
    /// every other query failure.
    pub fn from_query(err: SqlxError) -> Self {
        match &err {
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                DatabaseError::Constraint(db_err.message().to_string())
            }
            _ => DatabaseError::Query(err),
        }
    }

    /// Whether this error came from a uniqueness constraint
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DatabaseError::Constraint(_))
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
