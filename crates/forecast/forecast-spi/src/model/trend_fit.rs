//! Least-squares trend line

use serde::{Deserialize, Serialize};

/// `y = intercept + slope * t` fitted over time indices `t = 0..observations`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the line alone
    pub r_squared: f64,
    pub observations: usize,
}

impl TrendFit {
    /// Trend value at time index `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }

    /// Trend value `h` steps after the last observation.
    pub fn project(&self, h: usize) -> f64 {
        self.value_at((self.observations + h) as f64 - 1.0)
    }
}
