//! Inputs for seeding the payroll database.

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: Option<String>,
    pub department_id: Option<i64>,
    pub salary: f64,
    pub status: String,
    pub hire_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct NewPeriod {
    pub period_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub pay_date: Option<NaiveDate>,
    pub status: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewPayrollRecord {
    pub user_id: i64,
    pub period_id: i64,
    pub basic_salary: f64,
    pub hours_worked: f64,
    pub overtime_hours: f64,
    pub overtime_amount: f64,
    pub deductions: f64,
    pub bonuses: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct NewKpiScore {
    pub user_id: i64,
    pub month: u32,
    pub year: i32,
    pub score: f64,
    pub created_at: NaiveDate,
}
