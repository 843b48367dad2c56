//! SqliteStore queries against a seeded database.

use chrono::NaiveDate;
use payroll_core::{payroll_aggregates, SqliteStore};
use payroll_spi::{
    AggregateSource, NewEmployee, NewKpiScore, NewPayrollRecord, NewPeriod, StoreError,
    DEPARTMENT_WINDOW_MONTHS, HISTORY_WINDOW_MONTHS, TOP_EMPLOYEE_LIMIT,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn as_of() -> NaiveDate {
    date(2024, 6, 15)
}

fn employee(code: &str, first: &str, last: &str, dept: i64, salary: f64, status: &str) -> NewEmployee {
    NewEmployee {
        employee_id: code.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        position: None,
        department_id: Some(dept),
        salary,
        status: status.to_string(),
        hire_date: date(2020, 1, 6),
    }
}

fn period(store: &SqliteStore, name: &str, start: NaiveDate, end: NaiveDate) -> i64 {
    store
        .insert_period(&NewPeriod {
            period_name: name.to_string(),
            start_date: start,
            end_date: end,
            pay_date: end.succ_opt(),
            status: "closed".to_string(),
        })
        .unwrap()
}

fn pay(store: &SqliteStore, user_id: i64, period_id: i64, gross: f64, net: f64) {
    store
        .insert_payroll_record(&NewPayrollRecord {
            user_id,
            period_id,
            basic_salary: gross,
            hours_worked: 160.0,
            deductions: gross - net,
            gross_pay: gross,
            net_pay: net,
            status: "paid".to_string(),
            ..Default::default()
        })
        .unwrap();
}

fn score(store: &SqliteStore, user_id: i64, year: i32, month: u32, value: f64) {
    store
        .insert_kpi_score(&NewKpiScore {
            user_id,
            month,
            year,
            score: value,
            created_at: date(year, month, 28),
        })
        .unwrap();
}

struct Fixture {
    store: SqliteStore,
    engineering: i64,
    sales: i64,
    alice: i64,
    bob: i64,
    carol: i64,
    april: i64,
}

/// Alice (engineering) and Bob (sales) paid Jan..May 2024, Bob missing in
/// April, May split into two half-month periods, one record from 2021, and
/// an inactive engineer with no pay.
fn seed(store: SqliteStore) -> Fixture {
    let engineering = store.insert_department("Engineering").unwrap();
    let sales = store.insert_department("Sales").unwrap();
    let alice = store
        .insert_employee(&employee("E-001", "Alice", "Anders", engineering, 5000.0, "active"))
        .unwrap();
    let bob = store
        .insert_employee(&employee("E-002", "Bob", "Brown", sales, 4000.0, "active"))
        .unwrap();
    let carol = store
        .insert_employee(&employee("E-003", "Carol", "Clark", engineering, 6000.0, "inactive"))
        .unwrap();

    let old = period(&store, "Dec 2021", date(2021, 12, 1), date(2021, 12, 31));
    pay(&store, alice, old, 5000.0, 4000.0);

    for (month, end_day) in [(1, 31), (2, 29), (3, 31)] {
        let id = period(&store, "monthly", date(2024, month, 1), date(2024, month, end_day));
        pay(&store, alice, id, 5000.0, 4000.0);
        pay(&store, bob, id, 4000.0, 3200.0);
    }

    let april = period(&store, "Apr 2024", date(2024, 4, 1), date(2024, 4, 30));
    pay(&store, alice, april, 5000.0, 4000.0);

    for (start, end) in [(1, 15), (16, 31)] {
        let id = period(&store, "half", date(2024, 5, start), date(2024, 5, end));
        pay(&store, alice, id, 2500.0, 2000.0);
        pay(&store, bob, id, 2000.0, 1600.0);
    }

    score(&store, alice, 2021, 11, 10.0);
    score(&store, alice, 2024, 1, 80.0);
    score(&store, bob, 2024, 1, 90.0);
    score(&store, alice, 2024, 2, 82.0);

    Fixture {
        store,
        engineering,
        sales,
        alice,
        bob,
        carol,
        april,
    }
}

fn fixture() -> Fixture {
    seed(SqliteStore::open_in_memory().unwrap())
}

#[test]
fn test_payroll_history_groups_by_end_month() {
    let f = fixture();
    let rows = f.store.payroll_history(as_of(), HISTORY_WINDOW_MONTHS).unwrap();

    let months: Vec<(i32, u32)> = rows.iter().map(|r| (r.year, r.month)).collect();
    assert_eq!(months, vec![(2024, 1), (2024, 2), (2024, 3), (2024, 4), (2024, 5)]);
    assert_eq!(rows[0].month_name, "Jan");
    assert_eq!(rows[0].total_net, 7200.0);
    assert_eq!(rows[0].total_gross, 9000.0);
    assert_eq!(rows[0].employee_count, 2);

    assert_eq!(rows[3].total_net, 4000.0);
    assert_eq!(rows[3].employee_count, 1);

    // two half-month periods, two distinct employees
    assert_eq!(rows[4].total_net, 7200.0);
    assert_eq!(rows[4].employee_count, 2);
    assert_eq!(rows[4].avg_pay, 1800.0);
}

#[test]
fn test_payroll_history_honours_window() {
    let f = fixture();
    let rows = f.store.payroll_history(as_of(), 2).unwrap();
    // cutoff 2024-04-15: April's period ends on the 30th, May is inside
    let months: Vec<u32> = rows.iter().map(|r| r.month).collect();
    assert_eq!(months, vec![4, 5]);

    let rows = f.store.payroll_history(date(2024, 6, 15), 40).unwrap();
    assert_eq!(rows.first().map(|r| (r.year, r.month)), Some((2021, 12)));
}

#[test]
fn test_performance_history_averages_scores() {
    let f = fixture();
    let rows = f.store.performance_history(as_of(), HISTORY_WINDOW_MONTHS).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].year, rows[0].month), (2024, 1));
    assert_eq!(rows[0].avg_score, 85.0);
    assert_eq!(rows[0].employee_count, 2);
    assert_eq!(rows[1].month_name, "Feb");
    assert_eq!(rows[1].avg_score, 82.0);
}

#[test]
fn test_department_payroll_filters_department() {
    let f = fixture();
    let rows = f
        .store
        .department_payroll(f.engineering, as_of(), DEPARTMENT_WINDOW_MONTHS)
        .unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.total_pay == 4000.0 && r.employee_count == 1));

    assert!(f.store.department_payroll(999, as_of(), 12).unwrap().is_empty());
}

#[test]
fn test_data_quality() {
    let f = fixture();
    let quality = f.store.data_quality().unwrap();
    assert_eq!(quality.data_points, 12);
    assert_eq!(quality.min_date, Some(date(2021, 12, 31)));
    assert_eq!(quality.max_date, Some(date(2024, 5, 31)));
}

#[test]
fn test_data_quality_empty_database() {
    let store = SqliteStore::open_in_memory().unwrap();
    let quality = store.data_quality().unwrap();
    assert_eq!(quality.data_points, 0);
    assert!(quality.min_date.is_none());
    assert!(quality.max_date.is_none());
}

#[test]
fn test_payroll_periods_most_recent_first() {
    let f = fixture();
    let periods = f.store.payroll_periods(3).unwrap();
    let starts: Vec<NaiveDate> = periods.iter().map(|p| p.start_date).collect();
    assert_eq!(starts, vec![date(2024, 5, 16), date(2024, 5, 1), date(2024, 4, 1)]);
    assert_eq!(periods[2].pay_date, Some(date(2024, 5, 1)));
    assert_eq!(f.store.payroll_periods(100).unwrap().len(), 7);
}

#[test]
fn test_period_payroll_fills_missing_records() {
    let f = fixture();
    let payroll = f.store.period_payroll(f.april).unwrap();

    let names: Vec<&str> = payroll.employees.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(names, vec!["Anders", "Brown"]);

    let alice = &payroll.employees[0];
    assert_eq!(alice.status, "paid");
    assert_eq!(alice.net_pay, 4000.0);

    let bob = &payroll.employees[1];
    assert_eq!(bob.status, "pending");
    assert_eq!(bob.gross_pay, 4000.0);
    assert_eq!(bob.net_pay, 4000.0);
    assert_eq!(bob.hours_worked, 0.0);

    assert_eq!(payroll.totals.total_gross, 9000.0);
    assert_eq!(payroll.totals.total_net, 8000.0);
    assert_eq!(payroll.totals.total_deductions, 1000.0);
    assert_eq!(payroll.totals.total_hours, 160.0);
}

#[test]
fn test_period_payroll_unknown_period() {
    let f = fixture();
    let err = f.store.period_payroll(999).unwrap_err();
    assert_eq!(
        err,
        StoreError::NotFound {
            entity: "payroll period",
            id: 999
        }
    );
}

#[test]
fn test_payslip_with_record() {
    let f = fixture();
    let slip = f.store.payslip(f.alice, f.april).unwrap();
    assert_eq!(slip.employee_id, "E-001");
    assert_eq!(slip.salary, 5000.0);
    assert_eq!(slip.period.period_name, "Apr 2024");
    assert_eq!(slip.period.pay_date, Some(date(2024, 5, 1)));

    let earnings = slip.earnings.unwrap();
    assert_eq!(earnings.gross_pay, 5000.0);
    assert_eq!(earnings.net_pay, 4000.0);
    assert_eq!(earnings.deductions, 1000.0);
    assert_eq!(earnings.hours_worked, 160.0);
    assert_eq!(earnings.status, "paid");
}

#[test]
fn test_payslip_without_record() {
    let f = fixture();
    let slip = f.store.payslip(f.bob, f.april).unwrap();
    assert_eq!(slip.last_name, "Brown");
    assert!(slip.earnings.is_none());

    // inactive employees still get a statement
    let slip = f.store.payslip(f.carol, f.april).unwrap();
    assert_eq!(slip.first_name, "Carol");
    assert!(slip.earnings.is_none());
}

#[test]
fn test_payslip_unknown_ids() {
    let f = fixture();
    assert_eq!(
        f.store.payslip(999, f.april).unwrap_err(),
        StoreError::NotFound {
            entity: "employee",
            id: 999
        }
    );
    assert_eq!(
        f.store.payslip(f.alice, 999).unwrap_err(),
        StoreError::NotFound {
            entity: "payroll period",
            id: 999
        }
    );
}

#[test]
fn test_kpi_trends_for_year() {
    let f = fixture();
    let trends = f.store.kpi_trends(2024).unwrap();
    assert_eq!(trends.len(), 2);
    assert_eq!((trends[0].month, trends[0].month_name.as_str()), (1, "Jan"));
    assert_eq!(trends[0].avg_score, 85.0);
    assert_eq!(trends[0].total_scores, 2);
    assert_eq!(trends[1].avg_score, 82.0);
    assert_eq!(trends[1].total_scores, 1);

    let old = f.store.kpi_trends(2021).unwrap();
    assert_eq!(old.len(), 1);
    assert_eq!(old[0].month, 11);
    assert!(f.store.kpi_trends(2023).unwrap().is_empty());
}

#[test]
fn test_department_kpi_summary_best_first() {
    let f = fixture();
    let departments = f.store.department_kpi_summary().unwrap();
    assert_eq!(departments.len(), 2);

    assert_eq!(departments[0].department_id, f.sales);
    assert_eq!(departments[0].avg_score, 90.0);
    assert_eq!(departments[0].employee_count, 1);

    // Alice's three scores; Carol is inactive
    assert_eq!(departments[1].department_id, f.engineering);
    assert_eq!(departments[1].department_name, "Engineering");
    assert!((departments[1].avg_score - 172.0 / 3.0).abs() < 1e-9);
    assert_eq!(departments[1].employee_count, 1);
}

#[test]
fn test_department_kpi_summary_skips_unscored() {
    let f = fixture();
    let support = f.store.insert_department("Support").unwrap();
    f.store
        .insert_employee(&employee("E-004", "Dan", "Dunn", support, 3000.0, "active"))
        .unwrap();
    let departments = f.store.department_kpi_summary().unwrap();
    assert!(departments.iter().all(|d| d.department_id != support));
}

#[test]
fn test_top_employees_ranked() {
    let f = fixture();
    let top = f.store.top_employees(TOP_EMPLOYEE_LIMIT).unwrap();
    let ids: Vec<i64> = top.iter().map(|e| e.user_id).collect();
    assert_eq!(ids, vec![f.bob, f.alice]);
    assert_eq!(top[0].avg_score, 90.0);
    assert!(top[0].position.is_none());

    assert_eq!(f.store.top_employees(1).unwrap().len(), 1);
}

#[test]
fn test_kpi_overview_compares_months() {
    let f = fixture();

    let feb = f.store.kpi_overview(date(2024, 2, 10)).unwrap();
    assert_eq!(feb.average, 82.0);
    assert!((feb.change - (82.0 - 85.0) / 85.0 * 100.0).abs() < 1e-9);
    assert_eq!(feb.active_employees, 2);
    assert_eq!(feb.top_performers, 0);

    // no December scores to compare with
    let jan = f.store.kpi_overview(date(2024, 1, 31)).unwrap();
    assert_eq!(jan.average, 85.0);
    assert_eq!(jan.change, 0.0);
    assert_eq!(jan.top_performers, 1);
}

#[test]
fn test_kpi_overview_without_scores() {
    let f = fixture();
    let overview = f.store.kpi_overview(as_of()).unwrap();
    assert_eq!(overview.average, 0.0);
    assert_eq!(overview.change, 0.0);
    assert_eq!(overview.active_employees, 2);
    assert_eq!(overview.top_performers, 0);
}

#[test]
fn test_history_feeds_forecaster_input() {
    let f = fixture();
    let rows = f.store.payroll_history(as_of(), HISTORY_WINDOW_MONTHS).unwrap();
    let aggregates = payroll_aggregates(&rows);
    assert_eq!(aggregates.len(), 5);
    assert_eq!(aggregates[4].label, "May");
    assert_eq!(aggregates[4].value, 7200.0);
}

#[test]
fn test_ping() {
    assert!(SqliteStore::open_in_memory().unwrap().ping().is_ok());
}

#[test]
fn test_file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hr.db");
    {
        seed(SqliteStore::open(&path).unwrap());
    }
    let reopened = SqliteStore::open(&path).unwrap();
    assert_eq!(reopened.data_quality().unwrap().data_points, 12);
    assert_eq!(
        reopened.payroll_history(as_of(), HISTORY_WINDOW_MONTHS).unwrap().len(),
        5
    );
}
