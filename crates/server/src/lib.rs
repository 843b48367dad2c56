//! # server
//!
//! REST API for payroll and performance forecasting: historical monthly
//! aggregates from the payroll database, twelve-month linear projections,
//! summary metrics and a CSV report, next to the payroll period, payslip
//! and KPI analytics views they are read alongside.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod report;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use state::AppState;

/// Build the router with middleware
pub fn app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // Forecasting
        .route("/api/forecasting/payroll-historical", get(routes::payroll_historical))
        .route(
            "/api/forecasting/performance-historical",
            get(routes::performance_historical),
        )
        .route(
            "/api/forecasting/department-forecast/:departmentId",
            get(routes::department_forecast),
        )
        .route("/api/forecasting/model-info", get(routes::model_info))
        .route("/api/forecasting/summary", get(routes::forecast_summary))
        .route("/api/forecasting/project", post(routes::project))
        .route("/api/forecasting/report.csv", get(routes::forecast_report))
        // Payroll
        .route("/api/payroll/periods", get(routes::payroll_periods))
        .route("/api/payroll/:periodId", get(routes::period_payroll))
        .route(
            "/api/payroll/generate-payslip/:userId/:periodId",
            post(routes::generate_payslip),
        )
        // KPI analytics
        .route("/api/performance/kpi-trends", get(routes::kpi_trends))
        .route(
            "/api/performance/department-summary",
            get(routes::department_kpi_summary),
        )
        .route("/api/performance/top-employees", get(routes::top_employees))
        .route("/api/performance/overall-stats", get(routes::kpi_overview))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
