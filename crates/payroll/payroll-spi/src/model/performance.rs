//! KPI analytics views.

use super::numeric;
use serde::{Deserialize, Serialize};

/// Scores at or above this count as top performance
pub const TOP_PERFORMER_SCORE: f64 = 90.0;

/// Average score for one month of a year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTrend {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    #[serde(with = "numeric::average")]
    pub avg_score: f64,
    pub total_scores: i64,
}

/// Average score of a department's active employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentKpi {
    pub department_id: i64,
    pub department_name: String,
    #[serde(with = "numeric::average")]
    pub avg_score: f64,
    pub employee_count: i64,
}

/// An active employee ranked by average score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEmployee {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    #[serde(with = "numeric::average")]
    pub avg_score: f64,
}

/// Current-month KPI headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiOverview {
    /// Average score this month, zero without scores
    pub average: f64,
    /// Percent change against last month's average
    pub change: f64,
    pub active_employees: i64,
    pub top_performers: i64,
}

impl KpiOverview {
    /// Percent change from `previous` to `current`; zero when there is no
    /// previous average to compare with.
    pub fn percent_change(current: f64, previous: f64) -> f64 {
        if previous > 0.0 {
            (current - previous) / previous * 100.0
        } else {
            0.0
        }
    }
}
