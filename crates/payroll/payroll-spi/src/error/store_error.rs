//! Aggregator error types.

use thiserror::Error;

/// Aggregator errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Invalid stored data: {0}")]
    InvalidData(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
