//! End-to-end tests for the forecast engine
//!
//! Drives the forecaster through the facade only.

use forecast_facade::{forecast, ForecastMethod, MonthlyPoint, YearMonth};

fn series(start: &str, values: &[f64]) -> Vec<MonthlyPoint> {
    let first: YearMonth = start.parse().unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| MonthlyPoint::new(first.offset(i as i64), v))
        .collect()
}

/// 24 months from June 2022 to May 2024: 100 with a 20% spike every
/// June, July and August.
fn summer_peak() -> Vec<MonthlyPoint> {
    let first: YearMonth = "2022-06".parse().unwrap();
    (0..24)
        .map(|i| {
            let month = first.offset(i);
            let value = if (6..=8).contains(&month.month()) { 120.0 } else { 100.0 };
            MonthlyPoint::new(month, value)
        })
        .collect()
}

#[test]
fn e2e_seasonal_peak_recurs() {
    let history = summer_peak();
    let result = forecast(&history, 3);

    assert_eq!(result.method, ForecastMethod::SeasonalTrend);
    let months: Vec<String> = result.months.iter().map(ToString::to_string).collect();
    assert_eq!(months, vec!["2024-06", "2024-07", "2024-08"]);

    // the three months before the forecast are all off-season
    let preceding = history[history.len() - 3..].iter().map(|p| p.value).fold(0.0, f64::max);
    for value in &result.forecasted_values {
        assert!(
            *value > preceding + 5.0,
            "summer forecast {} should exceed off-season level {}",
            value,
            preceding
        );
    }

    let indices = result.diagnostics.seasonal_indices.unwrap();
    assert!(indices[6] > 0.0 && indices[0] < 0.0);
    assert!(!result.low_confidence);
}

#[test]
fn e2e_short_series_falls_back_flat() {
    let result = forecast(&series("2024-01", &[50.0, 52.0, 49.0, 51.0]), 3);

    assert_eq!(result.method, ForecastMethod::LinearFallback);
    let first = result.forecasted_values[0];
    assert!(result.forecasted_values.iter().all(|&v| (v - first).abs() < 1e-9));
    assert!((first - 50.666_666_666_666_664).abs() < 1e-9);
    assert!(result.low_confidence);
}

#[test]
fn e2e_forecast_never_negative() {
    let values: Vec<f64> = (0..14).map(|i| 200.0 - 15.0 * i as f64).collect();
    let result = forecast(&series("2023-01", &values), 12);
    assert!(result.forecasted_values.iter().all(|&v| v >= 0.0));
    assert!(result.lower.iter().all(|&v| v >= 0.0));
    assert!(result.upper.iter().zip(&result.forecasted_values).all(|(u, f)| u >= f));
}

#[test]
fn e2e_length_zero_and_one() {
    let empty = forecast(&[], 4);
    assert_eq!(empty.forecasted_values, vec![0.0; 4]);
    assert_eq!(empty.method, ForecastMethod::LinearFallback);

    let single = forecast(&series("2024-09", &[12.5]), 4);
    assert_eq!(single.forecasted_values, vec![12.5; 4]);
    assert_eq!(single.method, ForecastMethod::LinearFallback);
    assert_eq!(single.months.last().unwrap().to_string(), "2025-01");
}

#[test]
fn e2e_gappy_unsorted_input() {
    let mut history = summer_peak();
    history.retain(|p| p.month.month() != 2);
    history.reverse();

    let result = forecast(&history, 3);
    assert_eq!(result.diagnostics.interpolated_points, 2);
    assert_eq!(result.diagnostics.observed_points, 22);
    assert_eq!(result.method, ForecastMethod::SeasonalTrend);
    assert_eq!(result.months[0].to_string(), "2024-06");
}

#[test]
fn e2e_result_serializes_for_dashboards() {
    let result = forecast(&summer_peak(), 2);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["method"], "seasonal_trend");
    assert_eq!(json["forecastedValues"].as_array().unwrap().len(), 2);
    assert_eq!(json["confidenceLevel"], 0.95);
    assert!(json["diagnostics"]["rSquared"].is_number());
    assert_eq!(json["diagnostics"]["seasonalIndices"].as_array().unwrap().len(), 12);
}
