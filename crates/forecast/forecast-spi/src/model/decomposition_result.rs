//! Decomposition result model

use crate::model::TrendFit;

/// A monthly series split as `value = trend + seasonal + residual`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecompositionResult {
    /// Trend component per point
    pub trend: Vec<f64>,
    /// Seasonal component per point, all zero for trend-only decompositions
    pub seasonal: Vec<f64>,
    /// Residual component per point
    pub residual: Vec<f64>,
    pub fit: TrendFit,
    /// Additive index per calendar month, January first
    pub seasonal_indices: Option<[f64; 12]>,
}

impl DecompositionResult {
    /// In-sample R² of trend plus seasonal against the observed values.
    pub fn fitted_r_squared(&self, values: &[f64]) -> f64 {
        let n = values.len();
        if n == 0 {
            return 0.0;
        }
        let mean = values.iter().sum::<f64>() / n as f64;
        let ss_tot: f64 = values.iter().map(|y| (y - mean).powi(2)).sum();
        let ss_res: f64 = self.residual.iter().map(|r| r.powi(2)).sum();
        if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        }
    }
}
