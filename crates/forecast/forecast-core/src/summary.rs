//! Summary metrics derived from the payroll and performance forecasts

use crate::growth::round_to;
use forecast_spi::{ForecastMetrics, RiskLevel, TrendDirection, TrendModel};

/// Below this absolute payroll growth (percent) the trend is "Stable"
pub const STABLE_GROWTH_BAND: f64 = 1.0;

/// Payroll growth (percent) above which risk is high
pub const HIGH_RISK_PAYROLL_GROWTH: f64 = 25.0;

/// Performance growth (percent) below which risk is high
pub const HIGH_RISK_PERFORMANCE_DROP: f64 = -10.0;

/// Absolute payroll growth (percent) within which risk can be low
pub const LOW_RISK_PAYROLL_BAND: f64 = 10.0;

pub fn classify_trend(payroll_growth: f64) -> TrendDirection {
    if payroll_growth.abs() < STABLE_GROWTH_BAND {
        TrendDirection::Stable
    } else if payroll_growth > 0.0 {
        TrendDirection::Positive
    } else {
        TrendDirection::Negative
    }
}

pub fn classify_risk(payroll_growth: f64, performance_growth: f64) -> RiskLevel {
    if payroll_growth > HIGH_RISK_PAYROLL_GROWTH || performance_growth < HIGH_RISK_PERFORMANCE_DROP
    {
        RiskLevel::High
    } else if payroll_growth.abs() <= LOW_RISK_PAYROLL_BAND && performance_growth >= 0.0 {
        RiskLevel::Low
    } else {
        RiskLevel::Medium
    }
}

/// r² of the fit as a whole percentage; zero when nothing was fitted
pub fn confidence(model: Option<&TrendModel>) -> f64 {
    model
        .map(|m| round_to(m.r_squared.clamp(0.0, 1.0) * 100.0, 0))
        .unwrap_or(0.0)
}

pub fn summarize(
    payroll_growth: f64,
    performance_growth: f64,
    payroll_model: Option<&TrendModel>,
) -> ForecastMetrics {
    ForecastMetrics {
        payroll_growth,
        performance_growth,
        risk_level: classify_risk(payroll_growth, performance_growth),
        trend: classify_trend(payroll_growth),
        confidence: confidence(payroll_model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_classification() {
        assert_eq!(classify_trend(0.4), TrendDirection::Stable);
        assert_eq!(classify_trend(-0.9), TrendDirection::Stable);
        assert_eq!(classify_trend(12.5), TrendDirection::Positive);
        assert_eq!(classify_trend(-3.0), TrendDirection::Negative);
    }

    #[test]
    fn test_risk_classification() {
        assert_eq!(classify_risk(5.0, 2.0), RiskLevel::Low);
        assert_eq!(classify_risk(12.5, 8.3), RiskLevel::Medium);
        assert_eq!(classify_risk(30.0, 5.0), RiskLevel::High);
        assert_eq!(classify_risk(5.0, -12.0), RiskLevel::High);
        assert_eq!(classify_risk(5.0, -1.0), RiskLevel::Medium);
    }

    #[test]
    fn test_confidence_from_r_squared() {
        let model = TrendModel {
            slope: 1.0,
            intercept: 0.0,
            r_squared: 0.866,
            n_observations: 24,
            last_index: 23,
        };
        assert_eq!(confidence(Some(&model)), 87.0);
        assert_eq!(confidence(None), 0.0);
    }

    #[test]
    fn test_summarize() {
        let metrics = summarize(12.5, 8.3, None);
        assert_eq!(metrics.risk_level, RiskLevel::Medium);
        assert_eq!(metrics.trend, TrendDirection::Positive);
        assert_eq!(metrics.confidence, 0.0);
    }
}
