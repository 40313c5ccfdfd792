//! The monthly forecaster
//!
//! Method selection, by distinct observed months after gap filling:
//!
//! | observed months               | method            |
//! |-------------------------------|-------------------|
//! | fewer than `min_points_for_trend`, or a flat series | `linear_fallback` |
//! | up to `min_points_for_seasonal` | `linear_trend`  |
//! | `min_points_for_seasonal` or more | `seasonal_trend` |
//!
//! Every forecast value is clipped to be non-negative.

use forecast_api::ForecastConfig;
use forecast_spi::{
    ConfidenceIntervalComputer, Decomposer, DecompositionResult, ForecastDiagnostics,
    ForecastMethod, ForecastResult, MonthlyForecaster, Result, YearMonth,
};
use series_spi::MonthlyPoint;
use tracing::debug;

use crate::confidence::ResidualIntervalComputer;
use crate::decomposition::{MonthOfYearDecomposer, TrendDecomposer};
use crate::grid::{reindex, Reindexed};
use crate::stats::{mean, std_dev};

/// Trend/seasonal forecaster with a flat fallback for short or constant series.
pub struct TrendSeasonalForecaster {
    config: ForecastConfig,
    trend: Box<dyn Decomposer>,
    seasonal: Box<dyn Decomposer>,
    intervals: Box<dyn ConfidenceIntervalComputer>,
}

/// Point forecast before clipping plus what the band computer needs.
struct Projection {
    method: ForecastMethod,
    values: Vec<f64>,
    residuals: Vec<f64>,
    diagnostics: ForecastDiagnostics,
}

impl TrendSeasonalForecaster {
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Decomposer used when the series is too short for seasonality.
    pub fn with_trend_decomposer(mut self, trend: impl Decomposer + 'static) -> Self {
        self.trend = Box::new(trend);
        self
    }

    pub fn with_seasonal_decomposer(mut self, seasonal: impl Decomposer + 'static) -> Self {
        self.seasonal = Box::new(seasonal);
        self
    }

    pub fn with_interval_computer(
        mut self,
        intervals: impl ConfidenceIntervalComputer + 'static,
    ) -> Self {
        self.intervals = Box::new(intervals);
        self
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    fn is_flat(&self, values: &[f64]) -> bool {
        let m = mean(values);
        values.iter().all(|v| (v - m).abs() <= self.config.flat_epsilon)
    }

    fn project(&self, grid: &Reindexed, months: &[YearMonth], horizon: usize) -> Projection {
        let values = grid.values();
        if grid.observed < self.config.min_points_for_trend || self.is_flat(&values) {
            return self.fallback(&values, horizon);
        }

        let decomposed = if grid.observed >= self.config.min_points_for_seasonal {
            self.seasonal
                .decompose(&grid.points)
                .map(|d| (ForecastMethod::SeasonalTrend, d))
        } else {
            self.trend
                .decompose(&grid.points)
                .map(|d| (ForecastMethod::LinearTrend, d))
        };
        match decomposed {
            Ok((method, decomposition)) => {
                self.extend(method, decomposition, &values, months, horizon)
            }
            Err(_) => self.fallback(&values, horizon),
        }
    }

    fn extend(
        &self,
        method: ForecastMethod,
        decomposition: DecompositionResult,
        values: &[f64],
        months: &[YearMonth],
        horizon: usize,
    ) -> Projection {
        let fit = decomposition.fit;
        let indices = decomposition.seasonal_indices;
        let forecast = (1..=horizon)
            .map(|h| {
                let seasonal = match (indices, months.get(h - 1)) {
                    (Some(indices), Some(month)) => indices[month.month0()],
                    _ => 0.0,
                };
                fit.project(h) + seasonal
            })
            .collect();

        Projection {
            method,
            values: forecast,
            diagnostics: ForecastDiagnostics {
                slope: fit.slope,
                intercept: fit.intercept,
                r_squared: Some(fit.r_squared),
                fitted_r_squared: Some(decomposition.fitted_r_squared(values)),
                seasonal_indices: indices,
                ..ForecastDiagnostics::default()
            },
            residuals: decomposition.residual,
        }
    }

    /// Mean of the trailing window, repeated.
    fn fallback(&self, values: &[f64], horizon: usize) -> Projection {
        let window = &values[values.len().saturating_sub(self.config.fallback_window)..];
        let level = mean(window);
        Projection {
            method: ForecastMethod::LinearFallback,
            values: vec![level; horizon],
            residuals: values.iter().map(|v| v - level).collect(),
            diagnostics: ForecastDiagnostics {
                intercept: level,
                ..ForecastDiagnostics::default()
            },
        }
    }
}

impl Default for TrendSeasonalForecaster {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            trend: Box::new(TrendDecomposer),
            seasonal: Box::new(MonthOfYearDecomposer),
            intervals: Box::new(ResidualIntervalComputer),
        }
    }
}

impl MonthlyForecaster for TrendSeasonalForecaster {
    fn forecast(&self, series: &[MonthlyPoint], months_ahead: usize) -> ForecastResult {
        let grid = reindex(series);
        let months: Vec<YearMonth> = match grid.points.last() {
            Some(last) => (1..=months_ahead).map(|h| last.month.offset(h as i64)).collect(),
            None => Vec::new(),
        };

        let projection = self.project(&grid, &months, months_ahead);
        let forecasted_values: Vec<f64> = projection
            .values
            .iter()
            .map(|&v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
            .collect();
        let band = self.intervals.compute(
            &forecasted_values,
            &projection.residuals,
            self.config.confidence_level,
        );

        let history = grid.values();
        let diagnostics = ForecastDiagnostics {
            observed_points: grid.observed,
            interpolated_points: grid.interpolated,
            historical_mean: mean(&history),
            historical_std: std_dev(&history),
            ..projection.diagnostics
        };
        let low_confidence = projection.method != ForecastMethod::SeasonalTrend
            || diagnostics
                .fitted_r_squared
                .map_or(true, |r2| r2 < self.config.low_confidence_r_squared);

        debug!(
            method = %projection.method,
            observed = grid.observed,
            interpolated = grid.interpolated,
            r_squared = ?diagnostics.r_squared,
            slope = diagnostics.slope,
            months_ahead,
            "monthly forecast"
        );

        ForecastResult {
            forecasted_values,
            months,
            method: projection.method,
            lower: band.lower,
            upper: band.upper,
            confidence_level: band.confidence_level,
            low_confidence,
            diagnostics,
        }
    }
}

/// Forecast with the default configuration.
pub fn forecast(series: &[MonthlyPoint], months_ahead: usize) -> ForecastResult {
    TrendSeasonalForecaster::default().forecast(series, months_ahead)
}
