//! Tables read by the aggregator, created idempotently on open.

use rusqlite::Connection;

use payroll_spi::Result;

use crate::to_store_err;

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS departments (
            department_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            department_name TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS users (
            user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id   TEXT NOT NULL UNIQUE,
            first_name    TEXT NOT NULL,
            last_name     TEXT NOT NULL,
            email         TEXT NOT NULL UNIQUE,
            position      TEXT,
            department_id INTEGER REFERENCES departments(department_id),
            salary        REAL NOT NULL DEFAULT 0,
            status        TEXT NOT NULL DEFAULT 'active',
            hire_date     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_department ON users(department_id);

        CREATE TABLE IF NOT EXISTS payroll_periods (
            period_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            period_name TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            pay_date    TEXT,
            status      TEXT NOT NULL DEFAULT 'open'
        );

        CREATE INDEX IF NOT EXISTS idx_periods_end ON payroll_periods(end_date);

        CREATE TABLE IF NOT EXISTS payroll_records (
            record_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id         INTEGER NOT NULL REFERENCES users(user_id),
            period_id       INTEGER NOT NULL REFERENCES payroll_periods(period_id),
            basic_salary    REAL NOT NULL DEFAULT 0,
            hours_worked    REAL NOT NULL DEFAULT 0,
            overtime_hours  REAL NOT NULL DEFAULT 0,
            overtime_amount REAL NOT NULL DEFAULT 0,
            deductions      REAL NOT NULL DEFAULT 0,
            bonuses         REAL NOT NULL DEFAULT 0,
            gross_pay       REAL NOT NULL DEFAULT 0,
            net_pay         REAL NOT NULL DEFAULT 0,
            status          TEXT NOT NULL DEFAULT 'pending',
            UNIQUE (user_id, period_id)
        );

        CREATE INDEX IF NOT EXISTS idx_records_period ON payroll_records(period_id);

        CREATE TABLE IF NOT EXISTS kpi_scores (
            score_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id    INTEGER NOT NULL REFERENCES users(user_id),
            month      INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
            year       INTEGER NOT NULL,
            score      REAL NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_kpi_created ON kpi_scores(created_at);
        ",
    )
    .map_err(to_store_err)?;
    Ok(())
}
