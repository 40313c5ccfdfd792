//! Forecast result model

use std::fmt;

use serde::{Deserialize, Serialize};
use series_spi::YearMonth;

/// How a forecast was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// OLS trend plus additive calendar-month seasonal indices
    SeasonalTrend,
    /// OLS trend only; too little history for a seasonal profile.
    ///
    /// Serialized as `linear_trend`. Consumers that only recognize
    /// `seasonal_trend` and `linear_fallback` must handle this value too.
    LinearTrend,
    /// Flat continuation of the recent level; history too short or constant
    LinearFallback,
}

impl ForecastMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::SeasonalTrend => "seasonal_trend",
            ForecastMethod::LinearTrend => "linear_trend",
            ForecastMethod::LinearFallback => "linear_fallback",
        }
    }
}

impl fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fit statistics reported with every forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDiagnostics {
    /// Trend change per month; zero for the flat fallback
    pub slope: f64,
    pub intercept: f64,
    /// R² of the trend line, `None` when no line was fitted
    pub r_squared: Option<f64>,
    /// In-sample R² of the whole model (trend plus seasonal)
    pub fitted_r_squared: Option<f64>,
    /// Distinct months supplied by the caller
    pub observed_points: usize,
    /// Missing months filled by linear interpolation
    pub interpolated_points: usize,
    pub historical_mean: f64,
    pub historical_std: f64,
    /// Additive index per calendar month, January first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_indices: Option<[f64; 12]>,
}

/// Forecast of the months following a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// One non-negative value per requested month
    pub forecasted_values: Vec<f64>,
    /// Calendar month of each value; empty when the input series was empty
    pub months: Vec<YearMonth>,
    pub method: ForecastMethod,
    /// Lower confidence bound, never below zero
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
    pub confidence_level: f64,
    /// Set when the method is not `seasonal_trend` or the fit is weak
    pub low_confidence: bool,
    pub diagnostics: ForecastDiagnostics,
}

impl ForecastResult {
    pub fn total(&self) -> f64 {
        self.forecasted_values.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.forecasted_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasted_values.is_empty()
    }
}
