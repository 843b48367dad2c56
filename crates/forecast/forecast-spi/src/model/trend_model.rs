//! Fitted linear trend

use serde::{Deserialize, Serialize};

/// y = intercept + slope * x, fitted by ordinary least squares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendModel {
    /// Change per month
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit
    pub r_squared: f64,
    /// Number of historical points used
    pub n_observations: usize,
    /// x position of the last historical point
    pub last_index: usize,
}

impl TrendModel {
    /// Trend value at x position `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// x position of the `step`-th projected point (0-based)
    pub fn projection_index(&self, step: usize) -> usize {
        self.last_index + 1 + step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_at() {
        let model = TrendModel {
            slope: 10.0,
            intercept: 10.0,
            r_squared: 1.0,
            n_observations: 5,
            last_index: 4,
        };
        assert_eq!(model.predict_at(5.0), 60.0);
        assert_eq!(model.projection_index(0), 5);
        assert_eq!(model.projection_index(11), 16);
    }
}
