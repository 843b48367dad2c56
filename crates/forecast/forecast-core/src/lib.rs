//! Forecast Core
//!
//! Core implementations for the monthly trend forecaster: validation, gap
//! indexing, OLS fitting, jittered projection, labeling, growth and
//! summary metrics.

pub mod growth;
pub mod indexing;
pub mod jitter;
pub mod labels;
pub mod projection;
pub mod regression;
pub mod series;
pub mod summary;
pub mod validation;

// Re-export SPI types for implementations
pub use forecast_spi::{
    ChartSeries, Domain, ForecastError, ForecastMetrics, ForecastPoint, GapPolicy, JitterSource,
    LabelMode, MonthlyAggregate, Result, RiskLevel, TrendDirection, TrendFitter, TrendModel,
    YearMonth, MIN_SAMPLES,
};

// Re-export main types
pub use growth::growth_rate;
pub use indexing::index_history;
pub use jitter::{ConstantJitter, NoJitter, RandomJitter, SeededJitter};
pub use projection::{project, FORECAST_HORIZON};
pub use regression::{fit_trend, OlsTrendFitter};
pub use series::align;
pub use summary::summarize;
pub use validation::parse_value;
