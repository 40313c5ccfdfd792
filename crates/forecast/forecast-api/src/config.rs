//! Forecast configuration

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Method gates and band settings for the trend/seasonal forecaster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastConfig {
    /// Observed months needed before a trend line is fitted
    pub min_points_for_trend: usize,
    /// Observed months needed before seasonal indices are estimated
    pub min_points_for_seasonal: usize,
    /// Number of trailing points averaged by the flat fallback
    pub fallback_window: usize,
    /// Series whose values all lie within this distance of their mean are flat
    pub flat_epsilon: f64,
    /// Confidence level of the forecast bands (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Model R² below which a forecast is flagged low confidence
    pub low_confidence_r_squared: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            min_points_for_trend: 6,
            min_points_for_seasonal: 12,
            fallback_window: 3,
            flat_epsilon: 1e-9,
            confidence_level: 0.95,
            low_confidence_r_squared: 0.5,
        }
    }
}

impl ForecastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_points_for_trend(mut self, points: usize) -> Self {
        self.min_points_for_trend = points;
        self
    }

    pub fn with_fallback_window(mut self, points: usize) -> Self {
        self.fallback_window = points;
        self
    }

    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_points_for_trend < 2 {
            return Err(ForecastError::invalid_parameter(
                "minPointsForTrend",
                "a trend needs at least 2 points",
            ));
        }
        // a seasonal profile needs every calendar month at least once
        if self.min_points_for_seasonal < 12usize.max(self.min_points_for_trend) {
            return Err(ForecastError::invalid_parameter(
                "minPointsForSeasonal",
                format!(
                    "must be at least 12 and at least minPointsForTrend ({})",
                    self.min_points_for_trend
                ),
            ));
        }
        if self.fallback_window == 0 {
            return Err(ForecastError::invalid_parameter(
                "fallbackWindow",
                "must be at least 1",
            ));
        }
        if !self.flat_epsilon.is_finite() || self.flat_epsilon < 0.0 {
            return Err(ForecastError::invalid_parameter(
                "flatEpsilon",
                "must be a non-negative number",
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "confidenceLevel",
                "must be in (0, 1)",
            ));
        }
        if !(0.0..=1.0).contains(&self.low_confidence_r_squared) {
            return Err(ForecastError::invalid_parameter(
                "lowConfidenceRSquared",
                "must be in [0, 1]",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON policy blob; missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ForecastError::invalid_parameter("config", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
