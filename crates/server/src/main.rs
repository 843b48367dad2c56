//! Forecasting server binary.

use std::sync::Arc;

use forecast_facade::Forecaster;
use payroll_core::SqliteStore;
use server::{AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "server=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = SqliteStore::open(&config.database_path)?;
    let state = AppState::new(Arc::new(store), Forecaster::new(config.forecast.clone()));
    let app = server::app(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(
        label_mode = ?config.forecast.label_mode,
        gap_policy = ?config.forecast.gap_policy,
        "server v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
