//! Summary metrics shown next to the forecast charts

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Positive,
    Negative,
    Stable,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        };
        f.write_str(s)
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDirection::Positive => "Positive",
            TrendDirection::Negative => "Negative",
            TrendDirection::Stable => "Stable",
        };
        f.write_str(s)
    }
}

/// Scalar summary of a payroll + performance forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastMetrics {
    /// Percent change from last actual to last projected payroll
    pub payroll_growth: f64,
    /// Percent change from last actual to last projected average score
    pub performance_growth: f64,
    pub risk_level: RiskLevel,
    pub trend: TrendDirection,
    /// Goodness of the payroll fit, 0..=100
    pub confidence: f64,
}
