//! Trend and calendar-month seasonal decomposition
//!
//! Additive model `Y = T + S + R`: `T` is the least-squares line, `S` the
//! average deviation from that line per calendar month, centered so the
//! twelve indices sum to zero.

use forecast_spi::{DecompositionResult, Decomposer, ForecastError, Result, TrendFit};
use series_spi::MonthlyPoint;

use crate::trend::fit_trend;

/// Points needed to see every calendar month at least once.
pub const MIN_SEASONAL_POINTS: usize = 12;

/// Trend-only decomposition; the seasonal component is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendDecomposer;

impl Decomposer for TrendDecomposer {
    fn decompose(&self, series: &[MonthlyPoint]) -> Result<DecompositionResult> {
        decompose_trend(series)
    }
}

/// Trend plus additive month-of-year indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthOfYearDecomposer;

impl Decomposer for MonthOfYearDecomposer {
    fn decompose(&self, series: &[MonthlyPoint]) -> Result<DecompositionResult> {
        decompose_seasonal(series)
    }
}

fn values(series: &[MonthlyPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}

pub fn decompose_trend(series: &[MonthlyPoint]) -> Result<DecompositionResult> {
    let data = values(series);
    let fit = fit_trend(&data)?;
    let trend: Vec<f64> = (0..data.len()).map(|t| fit.value_at(t as f64)).collect();
    let residual = data.iter().zip(&trend).map(|(y, t)| y - t).collect();

    Ok(DecompositionResult {
        seasonal: vec![0.0; data.len()],
        trend,
        residual,
        fit,
        seasonal_indices: None,
    })
}

pub fn decompose_seasonal(series: &[MonthlyPoint]) -> Result<DecompositionResult> {
    if series.len() < MIN_SEASONAL_POINTS {
        return Err(ForecastError::InsufficientData {
            required: MIN_SEASONAL_POINTS,
            actual: series.len(),
        });
    }

    let data = values(series);
    let fit = fit_trend(&data)?;
    let trend: Vec<f64> = (0..data.len()).map(|t| fit.value_at(t as f64)).collect();
    let indices = seasonal_indices(series, &fit);

    let seasonal: Vec<f64> = series.iter().map(|p| indices[p.month.month0()]).collect();
    let residual = data
        .iter()
        .zip(&trend)
        .zip(&seasonal)
        .map(|((y, t), s)| y - t - s)
        .collect();

    Ok(DecompositionResult {
        trend,
        seasonal,
        residual,
        fit,
        seasonal_indices: Some(indices),
    })
}

/// Mean detrended value per calendar month, centered to sum to zero over the
/// months present. Months with no points get a zero index.
pub fn seasonal_indices(series: &[MonthlyPoint], fit: &TrendFit) -> [f64; 12] {
    let mut sums = [0.0f64; 12];
    let mut counts = [0usize; 12];
    for (t, point) in series.iter().enumerate() {
        let m = point.month.month0();
        sums[m] += point.value - fit.value_at(t as f64);
        counts[m] += 1;
    }

    let mut indices = [0.0f64; 12];
    let mut present = 0usize;
    let mut total = 0.0;
    for m in 0..12 {
        if counts[m] > 0 {
            indices[m] = sums[m] / counts[m] as f64;
            total += indices[m];
            present += 1;
        }
    }
    if present > 0 {
        let center = total / present as f64;
        for m in 0..12 {
            if counts[m] > 0 {
                indices[m] -= center;
            }
        }
    }
    indices
}
