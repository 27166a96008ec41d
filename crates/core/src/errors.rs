//! Core error types for the ETL cycle.
//!
//! Storage-specific errors (from sqlx, etc.) are converted to [`DatabaseError`]
//! by the storage layer so this crate stays database-agnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the persistence sinks.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Database-agnostic error type for the market store.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create the destination table.
    #[error("Failed to ensure schema: {0}")]
    SchemaFailed(String),

    /// A query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),
}
