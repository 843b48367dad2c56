//! Ordinary least squares trend over monthly history
//!
//! Fits y = intercept + slope * x where x is each bucket's
//! `sequence_index`. For contiguous history x runs 0..n-1.

use crate::validation::validate_history;
use forecast_spi::{
    ForecastError, MonthlyAggregate, Result, TrendFitter, TrendModel, MIN_SAMPLES,
};
use tracing::debug;

/// OLS implementation of [`TrendFitter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OlsTrendFitter;

impl OlsTrendFitter {
    pub fn new() -> Self {
        Self
    }
}

impl TrendFitter for OlsTrendFitter {
    fn fit(&self, history: &[MonthlyAggregate]) -> Result<Option<TrendModel>> {
        fit_trend(history)
    }
}

/// Fit a linear trend. `Ok(None)` below [`MIN_SAMPLES`] points.
pub fn fit_trend(history: &[MonthlyAggregate]) -> Result<Option<TrendModel>> {
    if history.len() < MIN_SAMPLES {
        return Ok(None);
    }
    validate_history(history)?;

    let n = history.len() as f64;
    let xs: Vec<f64> = history.iter().map(|h| h.sequence_index as f64).collect();

    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = history.iter().map(|h| h.value).sum();
    let sum_x2: f64 = xs.iter().map(|x| x * x).sum();
    let sum_xy: f64 = xs.iter().zip(history).map(|(x, h)| x * h.value).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < 1e-10 {
        return Err(ForecastError::NumericalError(
            "Singular design in trend regression".to_string(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = history.iter().map(|h| (h.value - mean_y).powi(2)).sum();
    let ss_res: f64 = xs
        .iter()
        .zip(history)
        .map(|(x, h)| (h.value - (intercept + slope * x)).powi(2))
        .sum();
    let r_squared = if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else {
        1.0
    };

    let last_index = history[history.len() - 1].sequence_index;
    debug!(
        slope,
        intercept,
        r_squared,
        n_observations = history.len(),
        "fitted monthly trend"
    );

    Ok(Some(TrendModel {
        slope,
        intercept,
        r_squared,
        n_observations: history.len(),
        last_index,
    }))
}

/// Residuals of the history around a fitted trend
pub fn residuals(model: &TrendModel, history: &[MonthlyAggregate]) -> Vec<f64> {
    history
        .iter()
        .map(|h| h.value - model.predict_at(h.sequence_index as f64))
        .collect()
}
