//! SqliteStore: one connection behind a mutex, schema applied on open.

use std::path::Path;
use std::sync::Mutex;

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, info};

use payroll_spi::{
    AggregateSource, DataQuality, DepartmentKpi, DepartmentMonth, KpiOverview, KpiTrend,
    NewEmployee, NewKpiScore, NewPayrollRecord, NewPeriod, PayrollMonth, PayrollPeriod, Payslip,
    PerformanceMonth, PeriodPayroll, Result, StoreError, TopEmployee,
};

use crate::{queries, schema, to_store_err};

/// SQLite-backed aggregator.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(to_store_err)?;
        let store = Self::from_connection(conn)?;
        info!(path = %path.display(), "Opened payroll database");
        Ok(store)
    }

    /// Private in-memory database (for tests and demos).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(to_store_err)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        schema::migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| StoreError::Unavailable(format!("connection lock poisoned: {e}")))?;
        f(&guard)
    }

    pub fn insert_department(&self, name: &str) -> Result<i64> {
        self.with_conn(|conn| queries::insert_department(conn, name))
    }

    pub fn insert_employee(&self, employee: &NewEmployee) -> Result<i64> {
        self.with_conn(|conn| queries::insert_employee(conn, employee))
    }

    pub fn insert_period(&self, period: &NewPeriod) -> Result<i64> {
        self.with_conn(|conn| queries::insert_period(conn, period))
    }

    pub fn insert_payroll_record(&self, record: &NewPayrollRecord) -> Result<i64> {
        self.with_conn(|conn| queries::insert_payroll_record(conn, record))
    }

    pub fn insert_kpi_score(&self, score: &NewKpiScore) -> Result<i64> {
        self.with_conn(|conn| queries::insert_kpi_score(conn, score))
    }
}

impl AggregateSource for SqliteStore {
    fn payroll_history(&self, as_of: NaiveDate, months: u32) -> Result<Vec<PayrollMonth>> {
        let rows = self.with_conn(|conn| queries::payroll_history(conn, as_of, months))?;
        debug!(%as_of, months, rows = rows.len(), "Loaded payroll history");
        Ok(rows)
    }

    fn performance_history(&self, as_of: NaiveDate, months: u32) -> Result<Vec<PerformanceMonth>> {
        let rows = self.with_conn(|conn| queries::performance_history(conn, as_of, months))?;
        debug!(%as_of, months, rows = rows.len(), "Loaded performance history");
        Ok(rows)
    }

    fn department_payroll(
        &self,
        department_id: i64,
        as_of: NaiveDate,
        months: u32,
    ) -> Result<Vec<DepartmentMonth>> {
        self.with_conn(|conn| queries::department_payroll(conn, department_id, as_of, months))
    }

    fn data_quality(&self) -> Result<DataQuality> {
        self.with_conn(queries::data_quality)
    }

    fn payroll_periods(&self, limit: usize) -> Result<Vec<PayrollPeriod>> {
        self.with_conn(|conn| queries::payroll_periods(conn, limit))
    }

    fn period_payroll(&self, period_id: i64) -> Result<PeriodPayroll> {
        self.with_conn(|conn| queries::period_payroll(conn, period_id))
    }

    fn payslip(&self, user_id: i64, period_id: i64) -> Result<Payslip> {
        let slip = self.with_conn(|conn| queries::payslip(conn, user_id, period_id))?;
        debug!(user_id, period_id, recorded = slip.earnings.is_some(), "Built payslip");
        Ok(slip)
    }

    fn kpi_trends(&self, year: i32) -> Result<Vec<KpiTrend>> {
        self.with_conn(|conn| queries::kpi_trends(conn, year))
    }

    fn department_kpi_summary(&self) -> Result<Vec<DepartmentKpi>> {
        self.with_conn(queries::department_kpi_summary)
    }

    fn top_employees(&self, limit: usize) -> Result<Vec<TopEmployee>> {
        self.with_conn(|conn| queries::top_employees(conn, limit))
    }

    fn kpi_overview(&self, as_of: NaiveDate) -> Result<KpiOverview> {
        self.with_conn(|conn| queries::kpi_overview(conn, as_of))
    }

    fn ping(&self) -> Result<()> {
        self.with_conn(|conn| {
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            Ok(())
        })
    }
}
