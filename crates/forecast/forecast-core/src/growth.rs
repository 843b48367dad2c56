//! Growth between the last actual and last projected value

use forecast_spi::{ForecastPoint, MonthlyAggregate};

/// Percent change from the last historical value to the last projected
/// value, rounded to one decimal. Zero when either side is empty or the
/// last historical value is zero.
pub fn growth_rate(history: &[MonthlyAggregate], forecast: &[ForecastPoint]) -> f64 {
    let (Some(last_actual), Some(last_projected)) = (history.last(), forecast.last()) else {
        return 0.0;
    };
    if last_actual.value == 0.0 {
        return 0.0;
    }
    round_to(
        (last_projected.value - last_actual.value) / last_actual.value * 100.0,
        1,
    )
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
