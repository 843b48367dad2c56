//! Month labels for projected points

use forecast_spi::{LabelMode, MonthlyAggregate, YearMonth, MONTH_ABBREVIATIONS};

/// Legacy positional label table; projection `i` gets `FIXED_CYCLE[i % 12]`
pub const FIXED_CYCLE: [&str; 12] = [
    "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
];

/// Labels (and calendar months, when known) for `count` projected points.
///
/// Calendar mode counts forward from the last historical period and falls
/// back to the fixed cycle when that period is unknown. Months past the
/// last representable year keep their label but carry no period.
pub fn projection_labels(
    history: &[MonthlyAggregate],
    mode: LabelMode,
    count: usize,
) -> Vec<(String, Option<YearMonth>)> {
    let last_period = history.last().and_then(|h| h.period);

    match (mode, last_period) {
        (LabelMode::Calendar, Some(last)) => (1..=count)
            .map(|k| {
                let label = MONTH_ABBREVIATIONS[(last.month() as usize - 1 + k) % 12];
                (label.to_string(), last.add_months(k as i64))
            })
            .collect(),
        _ => (0..count)
            .map(|i| (FIXED_CYCLE[i % FIXED_CYCLE.len()].to_string(), None))
            .collect(),
    }
}
