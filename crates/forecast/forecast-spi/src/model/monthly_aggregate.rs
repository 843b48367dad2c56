//! Historical monthly aggregate

use super::YearMonth;
use serde::{Deserialize, Serialize};

/// One monthly bucket of historical data (payroll total or average score)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAggregate {
    /// Position on the regression x axis; strictly increasing
    pub sequence_index: usize,
    /// Display month name
    pub label: String,
    pub value: f64,
    /// Calendar month of the bucket, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<YearMonth>,
}

impl MonthlyAggregate {
    pub fn new(sequence_index: usize, label: impl Into<String>, value: f64) -> Self {
        Self {
            sequence_index,
            label: label.into(),
            value,
            period: None,
        }
    }

    /// Bucket for a known calendar month, labeled with its abbreviation
    pub fn for_period(sequence_index: usize, period: YearMonth, value: f64) -> Self {
        Self {
            sequence_index,
            label: period.abbreviation().to_string(),
            value,
            period: Some(period),
        }
    }

    /// Contiguous, unlabeled history from raw values (index = position)
    pub fn from_values(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Self::new(i, format!("#{}", i + 1), v))
            .collect()
    }
}
