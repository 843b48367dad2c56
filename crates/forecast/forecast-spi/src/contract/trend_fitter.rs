//! Trait for fitting a linear trend to monthly history

use crate::error::Result;
use crate::model::{MonthlyAggregate, TrendModel};

/// Minimum number of historical points before a trend is fitted
pub const MIN_SAMPLES: usize = 3;

/// Fits a trend to an ordered history.
///
/// Returns `Ok(None)` when the history is shorter than [`MIN_SAMPLES`];
/// that is a "no forecast" outcome, not an error.
pub trait TrendFitter: Send + Sync {
    fn fit(&self, history: &[MonthlyAggregate]) -> Result<Option<TrendModel>>;
}
