//! API route handlers

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use forecast_facade::validation::ensure_finite;
use forecast_facade::{
    parse_value, summary, ChartSeries, Domain, DomainForecast, ForecastMetrics, ForecastPoint,
    JitterSource, MonthlyAggregate, NoJitter, SeededJitter, TrendModel, YearMonth,
};
use payroll_core::{payroll_aggregates, performance_aggregates};
use payroll_spi::{
    AggregateSource, DepartmentKpi, DepartmentMonth, KpiOverview, KpiTrend, NumericValue,
    PayrollMonth, PayrollPeriod, Payslip, PerformanceMonth, PeriodPayroll, TopEmployee,
    DEPARTMENT_WINDOW_MONTHS, HISTORY_WINDOW_MONTHS, TOP_EMPLOYEE_LIMIT,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::report::ForecastReport;
use crate::state::AppState;

pub const MODEL_TYPE: &str = "linear-trend";

/// Periods listed by `/api/payroll/periods`
const PERIOD_LIST_LIMIT: usize = 12;

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe - can the database answer?
pub async fn readiness(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    with_store(&state, |store| store.ping())
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;
    Ok(Json(HealthResponse {
        status: "ready",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

// =============================================================================
// Store access
// =============================================================================

/// Run a store call on the blocking pool.
async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&dyn AggregateSource) -> payroll_spi::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || f(store.as_ref()))
        .await
        .map_err(|e| ApiError::Internal(format!("store task failed: {e}")))?
        .map_err(ApiError::from)
}

/// A failed history fetch forecasts from nothing instead of failing the page.
fn or_empty<T>(domain: Domain, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        warn!(domain = %domain, error = %err, "history fetch failed, continuing without it");
        Vec::new()
    })
}

async fn load_histories(
    state: &AppState,
    as_of: NaiveDate,
) -> (Vec<PayrollMonth>, Vec<PerformanceMonth>) {
    let (payroll, performance) = tokio::join!(
        with_store(state, move |s| s.payroll_history(as_of, HISTORY_WINDOW_MONTHS)),
        with_store(state, move |s| s.performance_history(as_of, HISTORY_WINDOW_MONTHS)),
    );
    (
        or_empty(Domain::Payroll, payroll),
        or_empty(Domain::Performance, performance),
    )
}

// =============================================================================
// Historical data
// =============================================================================

#[derive(Debug, Serialize)]
pub struct HistoricalResponse<T> {
    pub historical: Vec<T>,
}

pub async fn payroll_historical(
    State(state): State<AppState>,
) -> Result<Json<HistoricalResponse<PayrollMonth>>, ApiError> {
    let as_of = state.today();
    let historical =
        with_store(&state, move |s| s.payroll_history(as_of, HISTORY_WINDOW_MONTHS)).await?;
    Ok(Json(HistoricalResponse { historical }))
}

pub async fn performance_historical(
    State(state): State<AppState>,
) -> Result<Json<HistoricalResponse<PerformanceMonth>>, ApiError> {
    let as_of = state.today();
    let historical =
        with_store(&state, move |s| s.performance_history(as_of, HISTORY_WINDOW_MONTHS)).await?;
    Ok(Json(HistoricalResponse { historical }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub department_data: Vec<DepartmentMonth>,
}

pub async fn department_forecast(
    State(state): State<AppState>,
    Path(department_id): Path<i64>,
) -> Result<Json<DepartmentResponse>, ApiError> {
    let as_of = state.today();
    let department_data = with_store(&state, move |s| {
        s.department_payroll(department_id, as_of, DEPARTMENT_WINDOW_MONTHS)
    })
    .await?;
    Ok(Json(DepartmentResponse { department_data }))
}

// =============================================================================
// Model info
// =============================================================================

#[derive(Debug, Serialize)]
pub struct DateRange {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub data_points: i64,
    pub date_range: DateRange,
    pub model_type: &'static str,
    /// Payroll fit r² as a percentage
    pub confidence: f64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfoResponse {
    pub model_info: ModelInfo,
}

pub async fn model_info(State(state): State<AppState>) -> Result<Json<ModelInfoResponse>, ApiError> {
    let as_of = state.today();
    let (quality, payroll) = tokio::join!(
        with_store(&state, |s| s.data_quality()),
        with_store(&state, move |s| s.payroll_history(as_of, HISTORY_WINDOW_MONTHS)),
    );
    let quality = quality?;
    let payroll = or_empty(Domain::Payroll, payroll);

    let fitted =
        state
            .forecaster
            .forecast(Domain::Payroll, payroll_aggregates(&payroll), &mut NoJitter)?;

    Ok(Json(ModelInfoResponse {
        model_info: ModelInfo {
            data_points: quality.data_points,
            date_range: DateRange {
                min_date: quality.min_date,
                max_date: quality.max_date,
            },
            model_type: MODEL_TYPE,
            confidence: summary::confidence(fitted.model.as_ref()),
            last_updated: Utc::now(),
        },
    }))
}

// =============================================================================
// Forecasts
// =============================================================================

/// Projection half of a [`DomainForecast`]
#[derive(Debug, Serialize)]
pub struct ForecastView {
    pub forecast: Vec<ForecastPoint>,
    pub growth: f64,
    pub model: Option<TrendModel>,
    pub chart: ChartSeries,
}

impl From<DomainForecast> for ForecastView {
    fn from(result: DomainForecast) -> Self {
        Self {
            forecast: result.points,
            growth: result.growth,
            model: result.model,
            chart: result.chart,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DomainSummary<T> {
    pub historical: Vec<T>,
    #[serde(flatten)]
    pub projection: ForecastView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub as_of: NaiveDate,
    pub model_type: &'static str,
    pub payroll: DomainSummary<PayrollMonth>,
    pub performance: DomainSummary<PerformanceMonth>,
    pub metrics: ForecastMetrics,
}

struct ForecastRun {
    as_of: NaiveDate,
    payroll_rows: Vec<PayrollMonth>,
    performance_rows: Vec<PerformanceMonth>,
    payroll: DomainForecast,
    performance: DomainForecast,
    metrics: ForecastMetrics,
}

async fn run_forecasts(state: &AppState) -> Result<ForecastRun, ApiError> {
    let as_of = state.today();
    let (payroll_rows, performance_rows) = load_histories(state, as_of).await;

    let forecaster = &state.forecaster;
    let mut jitter = forecaster.jitter_source();
    let payroll = forecaster.forecast(
        Domain::Payroll,
        payroll_aggregates(&payroll_rows),
        jitter.as_mut(),
    )?;
    let performance = forecaster.forecast(
        Domain::Performance,
        performance_aggregates(&performance_rows),
        jitter.as_mut(),
    )?;
    let metrics = forecaster.summarize(&payroll, &performance);

    Ok(ForecastRun {
        as_of,
        payroll_rows,
        performance_rows,
        payroll,
        performance,
        metrics,
    })
}

pub async fn forecast_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let run = run_forecasts(&state).await?;
    info!(
        payroll_growth = run.metrics.payroll_growth,
        risk = %run.metrics.risk_level,
        "forecast summary served"
    );
    Ok(Json(SummaryResponse {
        as_of: run.as_of,
        model_type: MODEL_TYPE,
        payroll: DomainSummary {
            historical: run.payroll_rows,
            projection: run.payroll.into(),
        },
        performance: DomainSummary {
            historical: run.performance_rows,
            projection: run.performance.into(),
        },
        metrics: run.metrics,
    }))
}

pub async fn forecast_report(State(state): State<AppState>) -> Result<Response, ApiError> {
    let run = run_forecasts(&state).await?;
    let report = ForecastReport {
        generated: run.as_of,
        model_type: MODEL_TYPE,
        payroll_forecast: &run.payroll.points,
        payroll_history: &run.payroll_rows,
        performance_forecast: &run.performance.points,
        performance_history: &run.performance_rows,
        metrics: &run.metrics,
    };
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.filename()),
        ),
    ];
    let body = report.to_csv()?;
    Ok((headers, body).into_response())
}

// =============================================================================
// Ad-hoc projection
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalInput {
    pub month_name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub total_net: Option<NumericValue>,
    pub avg_score: Option<NumericValue>,
}

impl HistoricalInput {
    fn to_aggregate(&self, index: usize, domain: Domain) -> Result<MonthlyAggregate, ApiError> {
        let (field, raw) = match domain {
            Domain::Payroll => ("total_net", self.total_net.as_ref()),
            Domain::Performance => ("avg_score", self.avg_score.as_ref()),
        };
        let raw = raw.ok_or_else(|| {
            ApiError::InvalidInput(format!("historical[{index}] has no {field}"))
        })?;
        let value = match raw {
            NumericValue::Number(n) => ensure_finite(index, *n)?,
            NumericValue::Text(s) => parse_value(index, s)?,
        };

        match (self.year, self.month) {
            (Some(year), Some(month)) => {
                let period = YearMonth::new(year, month).ok_or_else(|| {
                    ApiError::InvalidInput(format!(
                        "historical[{index}] {year}-{month} is outside the supported calendar"
                    ))
                })?;
                Ok(MonthlyAggregate::for_period(index, period, value))
            }
            _ => {
                let label = self
                    .month_name
                    .clone()
                    .unwrap_or_else(|| format!("#{}", index + 1));
                Ok(MonthlyAggregate::new(index, label, value))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRequest {
    pub domain: Domain,
    pub historical: Vec<HistoricalInput>,
    /// Reproducible jitter for this request
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub domain: Domain,
    #[serde(flatten)]
    pub projection: ForecastView,
}

pub async fn project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectRequest>, JsonRejection>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let Json(req) = payload?;
    let history = req
        .historical
        .iter()
        .enumerate()
        .map(|(i, row)| row.to_aggregate(i, req.domain))
        .collect::<Result<Vec<_>, _>>()?;

    let mut jitter: Box<dyn JitterSource> = match req.seed {
        Some(seed) => Box::new(SeededJitter::new(seed)),
        None => state.forecaster.jitter_source(),
    };
    let result = state
        .forecaster
        .forecast(req.domain, history, jitter.as_mut())?;

    Ok(Json(ProjectResponse {
        domain: req.domain,
        projection: result.into(),
    }))
}

// =============================================================================
// Payroll periods
// =============================================================================

pub async fn payroll_periods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PayrollPeriod>>, ApiError> {
    let periods = with_store(&state, |s| s.payroll_periods(PERIOD_LIST_LIMIT)).await?;
    Ok(Json(periods))
}

pub async fn period_payroll(
    State(state): State<AppState>,
    Path(period_id): Path<i64>,
) -> Result<Json<PeriodPayroll>, ApiError> {
    let payroll = with_store(&state, move |s| s.period_payroll(period_id)).await?;
    Ok(Json(payroll))
}

pub async fn generate_payslip(
    State(state): State<AppState>,
    Path((user_id, period_id)): Path<(i64, i64)>,
) -> Result<Json<Payslip>, ApiError> {
    let slip = with_store(&state, move |s| s.payslip(user_id, period_id)).await?;
    info!(user_id, period_id, "payslip generated");
    Ok(Json(slip))
}

// =============================================================================
// KPI analytics
// =============================================================================

#[derive(Debug, Serialize)]
pub struct KpiTrendsResponse {
    pub trends: Vec<KpiTrend>,
}

/// Monthly averages for the current calendar year
pub async fn kpi_trends(
    State(state): State<AppState>,
) -> Result<Json<KpiTrendsResponse>, ApiError> {
    let year = state.today().year();
    let trends = with_store(&state, move |s| s.kpi_trends(year)).await?;
    Ok(Json(KpiTrendsResponse { trends }))
}

#[derive(Debug, Serialize)]
pub struct DepartmentKpiResponse {
    pub departments: Vec<DepartmentKpi>,
}

pub async fn department_kpi_summary(
    State(state): State<AppState>,
) -> Result<Json<DepartmentKpiResponse>, ApiError> {
    let departments = with_store(&state, |s| s.department_kpi_summary()).await?;
    Ok(Json(DepartmentKpiResponse { departments }))
}

#[derive(Debug, Serialize)]
pub struct TopEmployeesResponse {
    pub employees: Vec<TopEmployee>,
}

pub async fn top_employees(
    State(state): State<AppState>,
) -> Result<Json<TopEmployeesResponse>, ApiError> {
    let employees = with_store(&state, |s| s.top_employees(TOP_EMPLOYEE_LIMIT)).await?;
    Ok(Json(TopEmployeesResponse { employees }))
}

#[derive(Debug, Serialize)]
pub struct KpiOverviewResponse {
    pub stats: KpiOverview,
}

pub async fn kpi_overview(
    State(state): State<AppState>,
) -> Result<Json<KpiOverviewResponse>, ApiError> {
    let as_of = state.today();
    let stats = with_store(&state, move |s| s.kpi_overview(as_of)).await?;
    Ok(Json(KpiOverviewResponse { stats }))
}
