//! Period-level payroll views.

use super::numeric;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pay cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollPeriod {
    pub period_id: i64,
    pub period_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pay_date: Option<NaiveDate>,
    pub status: String,
}

/// One active employee's pay in a period. Employees without a record for
/// the period show their salary as gross and net with status `pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollLine {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    #[serde(with = "numeric::money")]
    pub basic_salary: f64,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    #[serde(with = "numeric::money")]
    pub overtime_amount: f64,
    #[serde(with = "numeric::money")]
    pub deductions: f64,
    #[serde(with = "numeric::money")]
    pub bonuses: f64,
    #[serde(with = "numeric::money")]
    pub gross_pay: f64,
    #[serde(with = "numeric::money")]
    pub net_pay: f64,
    pub status: String,
}

/// Column sums over a period's lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub total_gross: f64,
    pub total_deductions: f64,
    pub total_net: f64,
    pub total_hours: f64,
    pub total_overtime: f64,
}

impl PeriodTotals {
    pub fn from_lines(lines: &[PayrollLine]) -> Self {
        lines.iter().fold(Self::default(), |acc, line| Self {
            total_gross: acc.total_gross + line.gross_pay,
            total_deductions: acc.total_deductions + line.deductions,
            total_net: acc.total_net + line.net_pay,
            total_hours: acc.total_hours + line.hours_worked,
            total_overtime: acc.total_overtime + line.overtime_amount,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPayroll {
    pub employees: Vec<PayrollLine>,
    pub totals: PeriodTotals,
}

/// Pay components of one payroll record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipEarnings {
    #[serde(with = "numeric::money")]
    pub basic_salary: f64,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    #[serde(with = "numeric::money")]
    pub overtime_amount: f64,
    #[serde(with = "numeric::money")]
    pub deductions: f64,
    #[serde(with = "numeric::money")]
    pub bonuses: f64,
    #[serde(with = "numeric::money")]
    pub gross_pay: f64,
    #[serde(with = "numeric::money")]
    pub net_pay: f64,
    pub status: String,
}

/// One employee's pay statement for a period. `earnings` is `None` until a
/// payroll record exists for the pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    pub position: Option<String>,
    #[serde(with = "numeric::money")]
    pub salary: f64,
    pub period: PayrollPeriod,
    pub earnings: Option<PayslipEarnings>,
}
