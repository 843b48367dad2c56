//! Forecast domain selector

use crate::error::ForecastError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which series is being forecast; drives jitter and clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Total net payroll per month, never negative
    Payroll,
    /// Average KPI score per month, a percentage in [0, 100]
    Performance,
}

impl Domain {
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Payroll => "payroll",
            Domain::Performance => "performance",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "payroll" => Ok(Domain::Payroll),
            "performance" => Ok(Domain::Performance),
            other => Err(ForecastError::InvalidParameter {
                name: "domain".to_string(),
                reason: format!("unknown domain '{}'", other),
            }),
        }
    }
}
