//! History rows to forecaster input.
//!
//! Indices are positional here; `forecast_core::index_history` applies the
//! configured gap policy afterwards.

use forecast_spi::{MonthlyAggregate, YearMonth};
use payroll_spi::{PayrollMonth, PerformanceMonth};

fn aggregate(index: usize, year: i32, month: u32, name: &str, value: f64) -> MonthlyAggregate {
    match YearMonth::new(year, month) {
        Some(period) => MonthlyAggregate::for_period(index, period, value),
        None => MonthlyAggregate::new(index, name, value),
    }
}

/// Net payroll per month
pub fn payroll_aggregates(rows: &[PayrollMonth]) -> Vec<MonthlyAggregate> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| aggregate(i, row.year, row.month, &row.month_name, row.total_net))
        .collect()
}

/// Average KPI score per month
pub fn performance_aggregates(rows: &[PerformanceMonth]) -> Vec<MonthlyAggregate> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| aggregate(i, row.year, row.month, &row.month_name, row.avg_score))
        .collect()
}
