//! Monthly aggregate rows.

use super::numeric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payroll totals for one calendar month of period end dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollMonth {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    #[serde(with = "numeric::money")]
    pub total_gross: f64,
    #[serde(with = "numeric::money")]
    pub total_net: f64,
    pub employee_count: i64,
    #[serde(with = "numeric::money")]
    pub avg_pay: f64,
}

/// Average KPI score for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMonth {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    #[serde(with = "numeric::average")]
    pub avg_score: f64,
    pub employee_count: i64,
}

/// Net pay for one department in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentMonth {
    pub year: i32,
    pub month: u32,
    #[serde(with = "numeric::money")]
    pub total_pay: f64,
    pub employee_count: i64,
}

/// How much payroll history is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuality {
    pub data_points: i64,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}
