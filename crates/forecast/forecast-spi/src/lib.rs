//! Forecast Service Provider Interface
//!
//! Data model, error type and trait contracts for the monthly trend
//! forecaster: histories of [`MonthlyAggregate`] go in, a [`TrendModel`]
//! and twelve [`ForecastPoint`]s come out.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{JitterSource, TrendFitter, MIN_SAMPLES};
pub use error::{ForecastError, Result};
pub use model::{
    month_abbreviation, ChartSeries, Domain, ForecastMetrics, ForecastPoint, GapPolicy, LabelMode,
    MonthlyAggregate, RiskLevel, TrendDirection, TrendModel, YearMonth, MONTH_ABBREVIATIONS,
};
