//! Error types shared by every dashboard harness crate.
//!
//! Storage and transport crates map their own failures into [`Error`] so
//! tests only ever match on one type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Service call failed: {0}")]
    ServiceCall(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage failures, with driver details flattened to strings.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// No row with the requested key, e.g. `"Account with id 999"`.
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// A stored value could not be turned into its domain type.
    #[error("Internal database error: {0}")]
    Internal(String),
}
