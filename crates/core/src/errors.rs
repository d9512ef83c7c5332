//! Core error types for the Quoteshelf application.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, r2d2, etc.) are converted to these types by the storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quotes application.
///
/// Database-specific errors are wrapped in string form to keep this type
/// database-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// All variants carry `String` details, allowing the storage layer to convert
/// storage-specific errors (Diesel, r2d2) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found. The payload is the full
    /// client-facing message.
    #[error("{0}")]
    NotFound(String),

    /// A mutating statement failed to commit; the transaction was rolled back.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Validation errors for request payloads and query parameters.
///
/// The `Display` output of each variant is the exact client-facing message.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid fields: {0}")]
    UnknownFields(String),

    #[error("Rating must be between 1 and 5")]
    InvalidRating,

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Unknown filter key: {0}")]
    UnknownFilterKey(String),

    #[error("Rating must be an integer, got '{0}'")]
    InvalidRatingValue(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
