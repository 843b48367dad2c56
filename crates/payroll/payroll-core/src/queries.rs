//! SQL behind the aggregator. Every function runs on a borrowed connection;
//! [`crate::SqliteStore`] owns locking.

use chrono::{Datelike, Months, NaiveDate};
use rusqlite::{params, Connection, OptionalExtension};

use forecast_spi::month_abbreviation;
use payroll_spi::{
    DataQuality, DepartmentKpi, DepartmentMonth, KpiOverview, KpiTrend, NewEmployee, NewKpiScore,
    NewPayrollRecord, NewPeriod, PayrollLine, PayrollMonth, PayrollPeriod, PayslipEarnings,
    Payslip, PerformanceMonth, PeriodPayroll, PeriodTotals, Result, StoreError, TopEmployee,
    TOP_PERFORMER_SCORE,
};

use crate::{to_store_err, DATE_FORMAT};

/// First date inside a trailing window of `months` ending at `as_of`.
pub fn window_start(as_of: NaiveDate, months: u32) -> Result<NaiveDate> {
    as_of.checked_sub_months(Months::new(months)).ok_or_else(|| {
        StoreError::InvalidData(format!("window of {} months before {} is out of range", months, as_of))
    })
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts plain dates and timestamps with a date prefix.
fn parse_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| StoreError::InvalidData(format!("bad date '{}': {}", raw, e)))
}

fn month_name(month: u32) -> Result<String> {
    month_abbreviation(month)
        .map(str::to_string)
        .ok_or_else(|| StoreError::InvalidData(format!("month {} out of range", month)))
}

// =============================================================================
// History
// =============================================================================

pub fn payroll_history(conn: &Connection, as_of: NaiveDate, months: u32) -> Result<Vec<PayrollMonth>> {
    let cutoff = format_date(window_start(as_of, months)?);
    let mut stmt = conn
        .prepare(
            "SELECT CAST(strftime('%Y', pp.end_date) AS INTEGER) AS year,
                    CAST(strftime('%m', pp.end_date) AS INTEGER) AS month,
                    SUM(pr.gross_pay),
                    SUM(pr.net_pay),
                    COUNT(DISTINCT pr.user_id),
                    AVG(pr.net_pay)
             FROM payroll_periods pp
             JOIN payroll_records pr ON pp.period_id = pr.period_id
             WHERE pp.end_date >= ?1
             GROUP BY year, month
             ORDER BY year, month",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![cutoff], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, f64>(5)?,
            ))
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;

    rows.into_iter()
        .map(|(year, month, total_gross, total_net, employee_count, avg_pay)| {
            Ok(PayrollMonth {
                year,
                month,
                month_name: month_name(month)?,
                total_gross,
                total_net,
                employee_count,
                avg_pay,
            })
        })
        .collect()
}

pub fn performance_history(
    conn: &Connection,
    as_of: NaiveDate,
    months: u32,
) -> Result<Vec<PerformanceMonth>> {
    let cutoff = format_date(window_start(as_of, months)?);
    let mut stmt = conn
        .prepare(
            "SELECT year, month, AVG(score), COUNT(DISTINCT user_id)
             FROM kpi_scores
             WHERE created_at >= ?1
             GROUP BY year, month
             ORDER BY year, month",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![cutoff], |row| {
            Ok((
                row.get::<_, i32>(0)?,
                row.get::<_, u32>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;

    rows.into_iter()
        .map(|(year, month, avg_score, employee_count)| {
            Ok(PerformanceMonth {
                year,
                month,
                month_name: month_name(month)?,
                avg_score,
                employee_count,
            })
        })
        .collect()
}

pub fn department_payroll(
    conn: &Connection,
    department_id: i64,
    as_of: NaiveDate,
    months: u32,
) -> Result<Vec<DepartmentMonth>> {
    let cutoff = format_date(window_start(as_of, months)?);
    let mut stmt = conn
        .prepare(
            "SELECT CAST(strftime('%Y', pp.end_date) AS INTEGER) AS year,
                    CAST(strftime('%m', pp.end_date) AS INTEGER) AS month,
                    SUM(pr.net_pay),
                    COUNT(DISTINCT pr.user_id)
             FROM payroll_records pr
             JOIN payroll_periods pp ON pr.period_id = pp.period_id
             JOIN users u ON pr.user_id = u.user_id
             WHERE u.department_id = ?1
               AND pp.end_date >= ?2
             GROUP BY year, month
             ORDER BY year, month",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![department_id, cutoff], |row| {
            Ok(DepartmentMonth {
                year: row.get(0)?,
                month: row.get(1)?,
                total_pay: row.get(2)?,
                employee_count: row.get(3)?,
            })
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;
    Ok(rows)
}

pub fn data_quality(conn: &Connection) -> Result<DataQuality> {
    let (data_points, min_date, max_date) = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM payroll_records),
                    (SELECT MIN(end_date) FROM payroll_periods),
                    (SELECT MAX(end_date) FROM payroll_periods)",
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                ))
            },
        )
        .map_err(to_store_err)?;

    Ok(DataQuality {
        data_points,
        min_date: min_date.as_deref().map(parse_date).transpose()?,
        max_date: max_date.as_deref().map(parse_date).transpose()?,
    })
}

// =============================================================================
// Periods
// =============================================================================

pub fn payroll_periods(conn: &Connection, limit: usize) -> Result<Vec<PayrollPeriod>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare(
            "SELECT period_id, period_name, start_date, end_date, pay_date, status
             FROM payroll_periods
             ORDER BY start_date DESC, period_id DESC
             LIMIT ?1",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![limit], period_row)
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;

    rows.into_iter().map(PeriodRow::into_period).collect()
}

/// Period columns as stored, before date parsing.
struct PeriodRow {
    period_id: i64,
    period_name: String,
    start_date: String,
    end_date: String,
    pay_date: Option<String>,
    status: String,
}

impl PeriodRow {
    fn into_period(self) -> Result<PayrollPeriod> {
        Ok(PayrollPeriod {
            period_id: self.period_id,
            period_name: self.period_name,
            start_date: parse_date(&self.start_date)?,
            end_date: parse_date(&self.end_date)?,
            pay_date: self.pay_date.as_deref().map(parse_date).transpose()?,
            status: self.status,
        })
    }
}

/// Reads `period_id, period_name, start_date, end_date, pay_date, status`.
fn period_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PeriodRow> {
    Ok(PeriodRow {
        period_id: row.get(0)?,
        period_name: row.get(1)?,
        start_date: row.get(2)?,
        end_date: row.get(3)?,
        pay_date: row.get(4)?,
        status: row.get(5)?,
    })
}

pub fn period_payroll(conn: &Connection, period_id: i64) -> Result<PeriodPayroll> {
    let exists = conn
        .query_row(
            "SELECT 1 FROM payroll_periods WHERE period_id = ?1",
            params![period_id],
            |_| Ok(()),
        )
        .optional()
        .map_err(to_store_err)?;
    if exists.is_none() {
        return Err(StoreError::NotFound {
            entity: "payroll period",
            id: period_id,
        });
    }

    let mut stmt = conn
        .prepare(
            "SELECT u.user_id, u.first_name, u.last_name, u.employee_id,
                    u.salary,
                    COALESCE(pr.hours_worked, 0),
                    COALESCE(pr.overtime_hours, 0),
                    COALESCE(pr.overtime_amount, 0),
                    COALESCE(pr.deductions, 0),
                    COALESCE(pr.bonuses, 0),
                    COALESCE(pr.gross_pay, u.salary),
                    COALESCE(pr.net_pay, u.salary),
                    COALESCE(pr.status, 'pending')
             FROM users u
             LEFT JOIN payroll_records pr ON u.user_id = pr.user_id AND pr.period_id = ?1
             WHERE u.status = 'active'
             ORDER BY u.last_name, u.first_name",
        )
        .map_err(to_store_err)?;

    let employees = stmt
        .query_map(params![period_id], |row| {
            Ok(PayrollLine {
                user_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                employee_id: row.get(3)?,
                basic_salary: row.get(4)?,
                hours_worked: row.get(5)?,
                overtime_hours: row.get(6)?,
                overtime_amount: row.get(7)?,
                deductions: row.get(8)?,
                bonuses: row.get(9)?,
                gross_pay: row.get(10)?,
                net_pay: row.get(11)?,
                status: row.get(12)?,
            })
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;

    let totals = PeriodTotals::from_lines(&employees);
    Ok(PeriodPayroll { employees, totals })
}

// =============================================================================
// Payslips
// =============================================================================

pub fn payslip(conn: &Connection, user_id: i64, period_id: i64) -> Result<Payslip> {
    let period = conn
        .query_row(
            "SELECT period_id, period_name, start_date, end_date, pay_date, status
             FROM payroll_periods
             WHERE period_id = ?1",
            params![period_id],
            period_row,
        )
        .optional()
        .map_err(to_store_err)?
        .ok_or(StoreError::NotFound {
            entity: "payroll period",
            id: period_id,
        })?
        .into_period()?;

    let slip = conn
        .query_row(
            "SELECT u.user_id, u.first_name, u.last_name, u.employee_id, u.position, u.salary,
                    pr.record_id,
                    pr.basic_salary, pr.hours_worked, pr.overtime_hours, pr.overtime_amount,
                    pr.deductions, pr.bonuses, pr.gross_pay, pr.net_pay, pr.status
             FROM users u
             LEFT JOIN payroll_records pr ON u.user_id = pr.user_id AND pr.period_id = ?2
             WHERE u.user_id = ?1",
            params![user_id, period_id],
            |row| {
                let record_id: Option<i64> = row.get(6)?;
                let earnings = match record_id {
                    Some(_) => Some(PayslipEarnings {
                        basic_salary: row.get(7)?,
                        hours_worked: row.get(8)?,
                        overtime_hours: row.get(9)?,
                        overtime_amount: row.get(10)?,
                        deductions: row.get(11)?,
                        bonuses: row.get(12)?,
                        gross_pay: row.get(13)?,
                        net_pay: row.get(14)?,
                        status: row.get(15)?,
                    }),
                    None => None,
                };
                Ok(Payslip {
                    user_id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    employee_id: row.get(3)?,
                    position: row.get(4)?,
                    salary: row.get(5)?,
                    period,
                    earnings,
                })
            },
        )
        .optional()
        .map_err(to_store_err)?;

    slip.ok_or(StoreError::NotFound {
        entity: "employee",
        id: user_id,
    })
}

// =============================================================================
// KPI analytics
// =============================================================================

pub fn kpi_trends(conn: &Connection, year: i32) -> Result<Vec<KpiTrend>> {
    let mut stmt = conn
        .prepare(
            "SELECT month, AVG(score), COUNT(*)
             FROM kpi_scores
             WHERE year = ?1
             GROUP BY month
             ORDER BY month",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![year], |row| {
            Ok((
                row.get::<_, u32>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;

    rows.into_iter()
        .map(|(month, avg_score, total_scores)| {
            Ok(KpiTrend {
                year,
                month,
                month_name: month_name(month)?,
                avg_score,
                total_scores,
            })
        })
        .collect()
}

pub fn department_kpi_summary(conn: &Connection) -> Result<Vec<DepartmentKpi>> {
    let mut stmt = conn
        .prepare(
            "SELECT d.department_id, d.department_name,
                    AVG(ks.score) AS avg_score,
                    COUNT(DISTINCT u.user_id)
             FROM departments d
             JOIN users u ON d.department_id = u.department_id
             LEFT JOIN kpi_scores ks ON u.user_id = ks.user_id
             WHERE u.status = 'active'
             GROUP BY d.department_id, d.department_name
             HAVING AVG(ks.score) IS NOT NULL
             ORDER BY avg_score DESC, d.department_id",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(DepartmentKpi {
                department_id: row.get(0)?,
                department_name: row.get(1)?,
                avg_score: row.get(2)?,
                employee_count: row.get(3)?,
            })
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;
    Ok(rows)
}

pub fn top_employees(conn: &Connection, limit: usize) -> Result<Vec<TopEmployee>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn
        .prepare(
            "SELECT u.user_id, u.first_name, u.last_name, u.position,
                    AVG(ks.score) AS avg_score
             FROM users u
             JOIN kpi_scores ks ON u.user_id = ks.user_id
             WHERE u.status = 'active'
             GROUP BY u.user_id, u.first_name, u.last_name, u.position
             ORDER BY avg_score DESC, u.user_id
             LIMIT ?1",
        )
        .map_err(to_store_err)?;

    let rows = stmt
        .query_map(params![limit], |row| {
            Ok(TopEmployee {
                user_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                position: row.get(3)?,
                avg_score: row.get(4)?,
            })
        })
        .map_err(to_store_err)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_store_err)?;
    Ok(rows)
}

fn month_average(conn: &Connection, year: i32, month: u32) -> Result<f64> {
    let avg: Option<f64> = conn
        .query_row(
            "SELECT AVG(score) FROM kpi_scores WHERE year = ?1 AND month = ?2",
            params![year, month],
            |row| row.get(0),
        )
        .map_err(to_store_err)?;
    Ok(avg.unwrap_or(0.0))
}

pub fn kpi_overview(conn: &Connection, as_of: NaiveDate) -> Result<KpiOverview> {
    let previous = window_start(as_of, 1)?;
    let average = month_average(conn, as_of.year(), as_of.month())?;
    let previous_average = month_average(conn, previous.year(), previous.month())?;

    let (active_employees, top_performers) = conn
        .query_row(
            "SELECT (SELECT COUNT(*) FROM users WHERE status = 'active'),
                    (SELECT COUNT(DISTINCT user_id) FROM kpi_scores
                     WHERE score >= ?1 AND year = ?2 AND month = ?3)",
            params![TOP_PERFORMER_SCORE, as_of.year(), as_of.month()],
            |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
        )
        .map_err(to_store_err)?;

    Ok(KpiOverview {
        average,
        change: KpiOverview::percent_change(average, previous_average),
        active_employees,
        top_performers,
    })
}

// =============================================================================
// Writes
// =============================================================================

pub fn insert_department(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO departments (department_name) VALUES (?1)",
        params![name],
    )
    .map_err(to_store_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_employee(conn: &Connection, employee: &NewEmployee) -> Result<i64> {
    conn.execute(
        "INSERT INTO users (
            employee_id, first_name, last_name, email, position,
            department_id, salary, status, hire_date
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            employee.employee_id,
            employee.first_name,
            employee.last_name,
            employee.email,
            employee.position,
            employee.department_id,
            employee.salary,
            employee.status,
            format_date(employee.hire_date),
        ],
    )
    .map_err(to_store_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_period(conn: &Connection, period: &NewPeriod) -> Result<i64> {
    conn.execute(
        "INSERT INTO payroll_periods (period_name, start_date, end_date, pay_date, status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            period.period_name,
            format_date(period.start_date),
            format_date(period.end_date),
            period.pay_date.map(format_date),
            period.status,
        ],
    )
    .map_err(to_store_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_payroll_record(conn: &Connection, record: &NewPayrollRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO payroll_records (
            user_id, period_id, basic_salary, hours_worked, overtime_hours,
            overtime_amount, deductions, bonuses, gross_pay, net_pay, status
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            record.user_id,
            record.period_id,
            record.basic_salary,
            record.hours_worked,
            record.overtime_hours,
            record.overtime_amount,
            record.deductions,
            record.bonuses,
            record.gross_pay,
            record.net_pay,
            record.status,
        ],
    )
    .map_err(to_store_err)?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_kpi_score(conn: &Connection, score: &NewKpiScore) -> Result<i64> {
    conn.execute(
        "INSERT INTO kpi_scores (user_id, month, year, score, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            score.user_id,
            score.month,
            score.year,
            score.score,
            format_date(score.created_at),
        ],
    )
    .map_err(to_store_err)?;
    Ok(conn.last_insert_rowid())
}
