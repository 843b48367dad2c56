//! Input validation for monthly aggregates
//!
//! Aggregates arrive as numeric strings from the SQL layer. Anything that
//! does not parse to a finite number fails the forecast rather than
//! flowing into the fit as NaN.

use forecast_spi::{ForecastError, MonthlyAggregate, Result};

/// Parse one raw aggregate value
pub fn parse_value(index: usize, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| ForecastError::InvalidValue {
        index,
        raw: raw.to_string(),
    })?;
    ensure_finite(index, value)
}

pub fn ensure_finite(index: usize, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForecastError::NonFiniteValue { index, value })
    }
}

/// Every value finite, every sequence index strictly greater than the previous
pub fn validate_history(history: &[MonthlyAggregate]) -> Result<()> {
    for (i, point) in history.iter().enumerate() {
        ensure_finite(i, point.value)?;
        if i > 0 && point.sequence_index <= history[i - 1].sequence_index {
            return Err(ForecastError::NonMonotonicIndex { index: i });
        }
    }
    Ok(())
}
