//! Trait for confidence interval computation

use crate::model::ConfidenceInterval;

/// Turns a point forecast and the in-sample residuals into bounds.
pub trait ConfidenceIntervalComputer: Send + Sync {
    fn compute(
        &self,
        forecast: &[f64],
        residuals: &[f64],
        confidence_level: f64,
    ) -> ConfidenceInterval;
}
