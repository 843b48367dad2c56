//! CSV export of a forecast.

use std::io;

use chrono::NaiveDate;
use forecast_facade::{ForecastMetrics, ForecastPoint};
use payroll_spi::{PayrollMonth, PerformanceMonth};

/// Everything one report shows.
pub struct ForecastReport<'a> {
    pub generated: NaiveDate,
    pub model_type: &'a str,
    pub payroll_forecast: &'a [ForecastPoint],
    pub payroll_history: &'a [PayrollMonth],
    pub performance_forecast: &'a [ForecastPoint],
    pub performance_history: &'a [PerformanceMonth],
    pub metrics: &'a ForecastMetrics,
}

impl ForecastReport<'_> {
    pub fn filename(&self) -> String {
        format!("forecast-report-{}.csv", self.generated.format("%Y-%m-%d"))
    }

    /// Render all sections, separated by blank lines.
    pub fn to_csv(&self) -> csv::Result<String> {
        let confidence = self.metrics.confidence;
        let header = vec![
            vec!["FORECASTING REPORT".to_string()],
            vec![format!("Generated: {}", self.generated.format("%Y-%m-%d"))],
            vec![format!("Model: {}", self.model_type)],
            vec![format!("Confidence: {}%", confidence)],
        ];

        let mut payroll_forecast = vec![
            vec!["PAYROLL FORECAST (Next 12 Months)".to_string()],
            record(["Month", "Predicted Amount", "Type"]),
        ];
        payroll_forecast.extend(self.payroll_forecast.iter().map(|p| {
            vec![p.label.clone(), format!("${:.2}", p.value), "Forecast".to_string()]
        }));

        let mut payroll_history = vec![
            vec!["HISTORICAL PAYROLL DATA".to_string()],
            record(["Month", "Actual Amount", "Employee Count"]),
        ];
        payroll_history.extend(self.payroll_history.iter().map(|h| {
            vec![
                h.month_name.clone(),
                format!("${:.2}", h.total_net),
                h.employee_count.to_string(),
            ]
        }));

        let mut performance_forecast = vec![
            vec!["PERFORMANCE FORECAST (Next 12 Months)".to_string()],
            record(["Month", "Predicted Score", "Type"]),
        ];
        performance_forecast.extend(self.performance_forecast.iter().map(|p| {
            vec![p.label.clone(), format!("{:.1}%", p.value), "Forecast".to_string()]
        }));

        let mut performance_history = vec![
            vec!["HISTORICAL PERFORMANCE DATA".to_string()],
            record(["Month", "Average Score", "Employee Count"]),
        ];
        performance_history.extend(self.performance_history.iter().map(|h| {
            vec![
                h.month_name.clone(),
                format!("{:.1}%", h.avg_score),
                h.employee_count.to_string(),
            ]
        }));

        let summary = vec![
            vec!["FORECAST SUMMARY".to_string()],
            vec!["Predicted Growth".to_string(), format!("{}%", self.metrics.payroll_growth)],
            vec!["Trend".to_string(), self.metrics.trend.to_string()],
            vec!["Risk Level".to_string(), self.metrics.risk_level.to_string()],
            vec!["Confidence Level".to_string(), format!("{}%", confidence)],
        ];

        let sections = [
            header,
            payroll_forecast,
            payroll_history,
            performance_forecast,
            performance_history,
            summary,
        ]
        .iter()
        .map(|rows| write_section(rows))
        .collect::<csv::Result<Vec<_>>>()?;

        // Each section ends with a terminator, so joining on one more
        // newline leaves a blank line between sections.
        Ok(sections.join("\n"))
    }
}

fn record<const N: usize>(fields: [&str; N]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// One block of rows. Rows differ in width, so the writer is flexible.
fn write_section(rows: &[Vec<String>]) -> csv::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(io::Error::new(e.error().kind(), e.to_string())))?;
    String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}
