//! Projected point

use super::YearMonth;
use serde::{Deserialize, Serialize};

/// One projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub label: String,
    pub value: f64,
    pub is_projection: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<YearMonth>,
}

impl ForecastPoint {
    pub fn projection(label: impl Into<String>, value: f64, period: Option<YearMonth>) -> Self {
        Self {
            label: label.into(),
            value,
            is_projection: true,
            period,
        }
    }
}
