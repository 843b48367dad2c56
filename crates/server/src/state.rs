//! Shared handler state.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use forecast_facade::Forecaster;
use payroll_spi::AggregateSource;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AggregateSource>,
    pub forecaster: Arc<Forecaster>,
    /// Fixed "today" for window queries; `None` reads the local clock
    pub as_of: Option<NaiveDate>,
}

impl AppState {
    pub fn new(store: Arc<dyn AggregateSource>, forecaster: Forecaster) -> Self {
        Self {
            store,
            forecaster: Arc::new(forecaster),
            as_of: None,
        }
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Local::now().date_naive())
    }
}
