//! Read-side query interface over the payroll database.

use crate::error::Result;
use crate::model::{
    DataQuality, DepartmentKpi, DepartmentMonth, KpiOverview, KpiTrend, PayrollMonth,
    PayrollPeriod, Payslip, PerformanceMonth, PeriodPayroll, TopEmployee,
};
use chrono::NaiveDate;

/// Trailing window used for forecasting history
pub const HISTORY_WINDOW_MONTHS: u32 = 24;

/// Trailing window used for department breakdowns
pub const DEPARTMENT_WINDOW_MONTHS: u32 = 12;

/// Employees listed by the top-performer ranking
pub const TOP_EMPLOYEE_LIMIT: usize = 10;

/// Monthly aggregates and payroll views.
///
/// Window queries take the request's `as_of` date instead of reading a
/// clock, so callers decide what "now" is.
pub trait AggregateSource: Send + Sync {
    /// Payroll totals per calendar month of period end date, ascending,
    /// for periods ending on or after `as_of - months`.
    fn payroll_history(&self, as_of: NaiveDate, months: u32) -> Result<Vec<PayrollMonth>>;

    /// Average KPI score per (year, month) for scores recorded on or after
    /// `as_of - months`, ascending.
    fn performance_history(&self, as_of: NaiveDate, months: u32) -> Result<Vec<PerformanceMonth>>;

    /// Net pay per month for one department.
    fn department_payroll(
        &self,
        department_id: i64,
        as_of: NaiveDate,
        months: u32,
    ) -> Result<Vec<DepartmentMonth>>;

    /// Record count and date range of stored payroll.
    fn data_quality(&self) -> Result<DataQuality>;

    /// Most recent periods by start date.
    fn payroll_periods(&self, limit: usize) -> Result<Vec<PayrollPeriod>>;

    /// Every active employee's pay for one period, with totals.
    fn period_payroll(&self, period_id: i64) -> Result<PeriodPayroll>;

    /// One employee's payslip for a period. Errors with `NotFound` when
    /// either the employee or the period does not exist.
    fn payslip(&self, user_id: i64, period_id: i64) -> Result<Payslip>;

    /// Average KPI score per month of `year`, ascending.
    fn kpi_trends(&self, year: i32) -> Result<Vec<KpiTrend>>;

    /// Average score per department over its active employees' scores,
    /// best first. Departments without scores are left out.
    fn department_kpi_summary(&self) -> Result<Vec<DepartmentKpi>>;

    /// Active employees with scores, best average first.
    fn top_employees(&self, limit: usize) -> Result<Vec<TopEmployee>>;

    /// Headline numbers for the month containing `as_of`.
    fn kpi_overview(&self, as_of: NaiveDate) -> Result<KpiOverview>;

    /// Cheap liveness query for readiness probes.
    fn ping(&self) -> Result<()>;
}
