//! Forecast Consumer API
//!
//! Consumer configuration and builder API for the monthly trend forecaster.
//!
//! This crate provides:
//! - [`ForecastConfig`], the serde-friendly knobs (labels, gaps, jitter)
//! - [`Forecaster`], which runs index → fit → project → growth → chart
//!   for one domain and summarizes a payroll/performance pair
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use forecast_core::{
    growth, indexing, jitter, labels, projection, regression, series, summary, validation,
    ConstantJitter, NoJitter, OlsTrendFitter, RandomJitter, SeededJitter, FORECAST_HORIZON,
};

// Re-export types from SPI
pub use forecast_spi::{
    ChartSeries, Domain, ForecastError, ForecastMetrics, ForecastPoint, GapPolicy, JitterSource,
    LabelMode, MonthlyAggregate, Result, RiskLevel, TrendDirection, TrendFitter, TrendModel,
    YearMonth, MIN_SAMPLES,
};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Configuration for forecast construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// How projected months are labeled
    pub label_mode: LabelMode,
    /// How missing months affect the regression x axis
    pub gap_policy: GapPolicy,
    /// Seed for reproducible jitter; `None` draws from entropy
    pub seed: Option<u64>,
    /// Whether projected values are perturbed at all
    pub jitter: bool,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            label_mode: LabelMode::Calendar,
            gap_policy: GapPolicy::Calendar,
            seed: None,
            jitter: true,
        }
    }
}

impl ForecastConfig {
    /// Straight-line projection, no randomness
    pub fn deterministic() -> Self {
        Self {
            jitter: false,
            ..Self::default()
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

/// Full result for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainForecast {
    pub domain: Domain,
    pub history: Vec<MonthlyAggregate>,
    /// `None` when the history was too short to fit
    pub model: Option<TrendModel>,
    pub points: Vec<ForecastPoint>,
    pub growth: f64,
    pub chart: ChartSeries,
}

impl DomainForecast {
    pub fn empty(domain: Domain) -> Self {
        Self {
            domain,
            history: Vec::new(),
            model: None,
            points: Vec::new(),
            growth: 0.0,
            chart: ChartSeries::default(),
        }
    }

    pub fn has_projection(&self) -> bool {
        !self.points.is_empty()
    }
}

/// Builder-configured forecaster
pub struct Forecaster {
    config: ForecastConfig,
    fitter: Box<dyn TrendFitter>,
}

impl Forecaster {
    pub fn new(config: ForecastConfig) -> Self {
        Self::with_fitter(config, Box::new(OlsTrendFitter::new()))
    }

    pub fn with_fitter(config: ForecastConfig, fitter: Box<dyn TrendFitter>) -> Self {
        Self { config, fitter }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Fresh jitter source matching the configuration
    pub fn jitter_source(&self) -> Box<dyn JitterSource> {
        match (self.config.jitter, self.config.seed) {
            (false, _) => Box::new(NoJitter),
            (true, Some(seed)) => Box::new(SeededJitter::new(seed)),
            (true, None) => Box::new(RandomJitter::new()),
        }
    }

    /// Forecast one domain from its history (any `sequence_index` values
    /// are replaced according to the gap policy)
    pub fn forecast(
        &self,
        domain: Domain,
        history: Vec<MonthlyAggregate>,
        jitter: &mut dyn JitterSource,
    ) -> Result<DomainForecast> {
        let history = forecast_core::index_history(history, self.config.gap_policy)?;
        let model = self.fitter.fit(&history)?;

        let points = match &model {
            Some(m) => forecast_core::project(m, &history, domain, self.config.label_mode, jitter),
            None => Vec::new(),
        };
        let growth = forecast_core::growth_rate(&history, &points);
        let chart = forecast_core::align(&history, &points);

        info!(
            domain = %domain,
            observations = history.len(),
            projected = points.len(),
            growth,
            "forecast computed"
        );

        Ok(DomainForecast {
            domain,
            history,
            model,
            points,
            growth,
            chart,
        })
    }

    /// Forecast with a jitter source built from the configuration
    pub fn forecast_with_config_jitter(
        &self,
        domain: Domain,
        history: Vec<MonthlyAggregate>,
    ) -> Result<DomainForecast> {
        let mut jitter = self.jitter_source();
        self.forecast(domain, history, jitter.as_mut())
    }

    pub fn summarize(
        &self,
        payroll: &DomainForecast,
        performance: &DomainForecast,
    ) -> ForecastMetrics {
        forecast_core::summarize(payroll.growth, performance.growth, payroll.model.as_ref())
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DomainForecast, ForecastConfig, Forecaster};
    pub use forecast_core::{ConstantJitter, NoJitter, RandomJitter, SeededJitter};
    pub use forecast_spi::{
        Domain, ForecastError, ForecastMetrics, ForecastPoint, GapPolicy, JitterSource,
        LabelMode, MonthlyAggregate, Result, TrendModel, YearMonth,
    };
}
