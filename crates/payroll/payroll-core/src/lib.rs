//! Payroll Core
//!
//! SQLite implementation of [`payroll_spi::AggregateSource`] plus the
//! conversions from history rows to forecaster input.

pub mod conversion;
pub mod queries;
pub mod schema;
pub mod sqlite_store;

pub use conversion::{payroll_aggregates, performance_aggregates};
pub use sqlite_store::SqliteStore;

use payroll_spi::StoreError;

/// Date format of every date column
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn to_store_err(err: rusqlite::Error) -> StoreError {
    StoreError::Database(err.to_string())
}
