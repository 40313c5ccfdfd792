//! Forecast confidence bands
//!
//! Bands widen with the square root of the horizon around each point
//! forecast, scaled by the spread of the in-sample residuals. The lower bound
//! is clipped at zero because forecast quantities are physical amounts.

use forecast_spi::{ConfidenceInterval, ConfidenceIntervalComputer};

use crate::stats::std_dev;

/// Two-sided normal quantiles for common confidence levels, highest first.
const Z_TABLE: [(f64, f64); 6] = [
    (0.99, 2.576),
    (0.98, 2.326),
    (0.95, 1.960),
    (0.90, 1.645),
    (0.80, 1.282),
    (0.50, 0.674),
];

/// Residual-spread confidence band computer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidualIntervalComputer;

impl ResidualIntervalComputer {
    pub fn new() -> Self {
        Self
    }
}

impl ConfidenceIntervalComputer for ResidualIntervalComputer {
    fn compute(
        &self,
        forecast: &[f64],
        residuals: &[f64],
        confidence_level: f64,
    ) -> ConfidenceInterval {
        interval_from_residuals(forecast, residuals, confidence_level)
    }
}

pub fn interval_from_residuals(
    forecast: &[f64],
    residuals: &[f64],
    confidence_level: f64,
) -> ConfidenceInterval {
    let spread = z_score(confidence_level) * std_dev(residuals);

    let mut lower = Vec::with_capacity(forecast.len());
    let mut upper = Vec::with_capacity(forecast.len());
    for (h, &f) in forecast.iter().enumerate() {
        let margin = spread * ((h + 1) as f64).sqrt();
        lower.push((f - margin).max(0.0));
        upper.push(f + margin);
    }

    ConfidenceInterval {
        forecast: forecast.to_vec(),
        lower,
        upper,
        confidence_level,
    }
}

/// Quantile for the largest tabulated level not above `confidence_level`.
pub fn z_score(confidence_level: f64) -> f64 {
    Z_TABLE
        .iter()
        .find(|(level, _)| confidence_level >= *level)
        .map(|(_, z)| *z)
        .unwrap_or(0.674)
}
