//! Chart-ready alignment of actual and projected values

use serde::{Deserialize, Serialize};

/// Two datasets on a shared label axis. `actual` is padded with `None`
/// over the projection, `projected` is padded with `None` over history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub actual: Vec<Option<f64>>,
    pub projected: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
