//! Placement of historical buckets on the regression x axis

use forecast_spi::{ForecastError, GapPolicy, MonthlyAggregate, Result};

/// Assign `sequence_index` to each bucket according to `policy`.
///
/// `Calendar` needs a period on every bucket; if any is missing the
/// history is indexed positionally instead.
pub fn index_history(
    mut history: Vec<MonthlyAggregate>,
    policy: GapPolicy,
) -> Result<Vec<MonthlyAggregate>> {
    let all_dated = !history.is_empty() && history.iter().all(|h| h.period.is_some());

    match (policy, all_dated) {
        (GapPolicy::Calendar, true) => {
            let periods: Vec<_> = history.iter().filter_map(|h| h.period).collect();
            let first = periods[0];
            for (i, window) in periods.windows(2).enumerate() {
                if window[1] <= window[0] {
                    return Err(ForecastError::NonMonotonicIndex { index: i + 1 });
                }
            }
            for (point, period) in history.iter_mut().zip(periods.iter()) {
                point.sequence_index = period.months_since(&first) as usize;
            }
        }
        _ => {
            for (i, point) in history.iter_mut().enumerate() {
                point.sequence_index = i;
            }
        }
    }

    Ok(history)
}
