//! Model module containing data structures

mod chart_series;
mod domain;
mod forecast_point;
mod metrics;
mod monthly_aggregate;
mod policy;
mod trend_model;
mod year_month;

pub use chart_series::ChartSeries;
pub use domain::Domain;
pub use forecast_point::ForecastPoint;
pub use metrics::{ForecastMetrics, RiskLevel, TrendDirection};
pub use monthly_aggregate::MonthlyAggregate;
pub use policy::{GapPolicy, LabelMode};
pub use trend_model::TrendModel;
pub use year_month::{month_abbreviation, YearMonth, MONTH_ABBREVIATIONS};
