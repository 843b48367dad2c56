//! Alignment of history and projection on one label axis

use forecast_spi::{ChartSeries, ForecastPoint, MonthlyAggregate};

pub fn align(history: &[MonthlyAggregate], forecast: &[ForecastPoint]) -> ChartSeries {
    let labels = history
        .iter()
        .map(|h| h.label.clone())
        .chain(forecast.iter().map(|f| f.label.clone()))
        .collect();

    let actual = history
        .iter()
        .map(|h| Some(h.value))
        .chain(std::iter::repeat(None).take(forecast.len()))
        .collect();

    let projected = std::iter::repeat(None)
        .take(history.len())
        .chain(forecast.iter().map(|f| Some(f.value)))
        .collect();

    ChartSeries {
        labels,
        actual,
        projected,
    }
}
