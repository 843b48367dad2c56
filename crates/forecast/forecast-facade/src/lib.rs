//! Forecast Facade
//!
//! High-level API for the monthly trend forecaster. Re-exports all public
//! types from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{
    growth, indexing, jitter, labels, projection, regression, series, summary, validation,
};

// Re-export the free functions at root
pub use forecast_core::{
    align, fit_trend, growth_rate, index_history, parse_value, project, summarize,
};
