//! Ordinary least-squares trend
//!
//! Fits `y = intercept + slope * t` over the time indices `t = 0, 1, 2, ...`
//! of a gap-free series.

use forecast_spi::{ForecastError, Result, TrendFit};

/// Fit the trend line and its R².
pub fn fit_trend(values: &[f64]) -> Result<TrendFit> {
    if values.len() < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let n = values.len() as f64;
    let mean_t = (n - 1.0) / 2.0;
    let mean_y = values.iter().sum::<f64>() / n;

    // centered sums keep the normal equations well conditioned
    let mut s_tt = 0.0;
    let mut s_ty = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dt = i as f64 - mean_t;
        s_tt += dt * dt;
        s_ty += dt * (y - mean_y);
    }

    let slope = s_ty / s_tt;
    let intercept = mean_y - slope * mean_t;

    let ss_tot: f64 = values.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
        .sum();
    let r_squared = if ss_tot > 1e-10 {
        (1.0 - ss_res / ss_tot).max(0.0)
    } else {
        1.0
    };

    Ok(TrendFit {
        slope,
        intercept,
        r_squared,
        observations: values.len(),
    })
}

/// Observed minus fitted value at each index.
pub fn residuals(fit: &TrendFit, values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &y)| y - fit.value_at(i as f64))
        .collect()
}
