//! Twelve-month projection with domain-specific jitter and clamping

use crate::labels::projection_labels;
use forecast_spi::{
    Domain, ForecastPoint, JitterSource, LabelMode, MonthlyAggregate, TrendModel, MIN_SAMPLES,
};

/// Number of projected months
pub const FORECAST_HORIZON: usize = 12;

/// Payroll jitter spans ±2.5% of the predicted value
pub const PAYROLL_JITTER_FRACTION: f64 = 0.05;

/// Performance jitter spans ±1 score point
pub const PERFORMANCE_JITTER_POINTS: f64 = 2.0;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Apply jitter for `unit` (a sample in `[0, 1)`) and clamp to the domain
pub fn adjust(domain: Domain, predicted: f64, unit: f64) -> f64 {
    let centered = unit - 0.5;
    match domain {
        Domain::Payroll => (predicted + predicted * PAYROLL_JITTER_FRACTION * centered).max(0.0),
        Domain::Performance => {
            (predicted + PERFORMANCE_JITTER_POINTS * centered).clamp(SCORE_MIN, SCORE_MAX)
        }
    }
}

/// Project [`FORECAST_HORIZON`] months past the end of `history`.
///
/// Empty when the history is below the minimum sample size.
pub fn project(
    model: &TrendModel,
    history: &[MonthlyAggregate],
    domain: Domain,
    label_mode: LabelMode,
    jitter: &mut dyn JitterSource,
) -> Vec<ForecastPoint> {
    if history.len() < MIN_SAMPLES {
        return Vec::new();
    }

    projection_labels(history, label_mode, FORECAST_HORIZON)
        .into_iter()
        .enumerate()
        .map(|(step, (label, period))| {
            let x = model.projection_index(step) as f64;
            let value = adjust(domain, model.predict_at(x), jitter.sample());
            ForecastPoint::projection(label, value, period)
        })
        .collect()
}
