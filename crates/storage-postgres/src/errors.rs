//! Storage-specific error types for PostgreSQL operations.
//!
//! These wrap sqlx errors and are converted to the database-agnostic
//! `coinetl_core` error before leaving the crate.

use std::time::Duration;

use coinetl_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(#[source] sqlx::Error),

    #[error("Database connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    #[error("Failed to create table: {0}")]
    SchemaFailed(#[source] sqlx::Error),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] sqlx::Error),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConnectionFailed(_) | StorageError::ConnectTimeout(_) => {
                Error::Database(DatabaseError::ConnectionFailed(err.to_string()))
            }
            StorageError::SchemaFailed(_) => {
                Error::Database(DatabaseError::SchemaFailed(err.to_string()))
            }
            StorageError::QueryFailed(_) => {
                Error::Database(DatabaseError::QueryFailed(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_connection_failed() {
        let err: Error = StorageError::ConnectTimeout(Duration::from_secs(10)).into();
        match err {
            Error::Database(DatabaseError::ConnectionFailed(msg)) => {
                assert_eq!(msg, "Database connection timed out after 10s")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_schema_failure_maps_to_schema_failed() {
        let err: Error = StorageError::SchemaFailed(sqlx::Error::PoolClosed).into();
        assert!(matches!(err, Error::Database(DatabaseError::SchemaFailed(_))));
    }

    #[test]
    fn test_query_failure_maps_to_query_failed() {
        let err: Error = StorageError::from(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, Error::Database(DatabaseError::QueryFailed(_))));
    }
}
