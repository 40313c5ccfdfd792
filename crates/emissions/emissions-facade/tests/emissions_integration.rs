//! Integration tests: raw ingestion, configuration, projection with the
//! forecast engine, and request-scoped caching.

use emissions_facade::{
    AggregationConfig, BaselineCache, Category, DateWindow, EmissionsAggregator,
    EmissionsCalculator, MetricRecord, MonthlyPoint, ProgressStatus, ProgressThresholds,
    RawMetricRecord, ReductionTargetConfig, RecordError, Scope, YearMonth,
};
use forecast_facade::ForecastMethod;
use serde_json::json;

fn raw_rows(rows: serde_json::Value) -> Vec<RawMetricRecord> {
    serde_json::from_value(rows).unwrap()
}

fn electricity_history() -> Vec<RawMetricRecord> {
    let mut rows = Vec::new();
    for year in [2023, 2024] {
        let last = if year == 2023 { 12 } else { 6 };
        for m in 1..=last {
            let kg = if (6..=8).contains(&m) { 1200.0 } else { 1000.0 };
            rows.push(json!({
                "metricId": "Electricity",
                "category": "Purchased Electricity",
                "periodStart": format!("{}-{:02}-01", year, m),
                "value": kg * 2.5,
                "unit": "kWh",
                "co2eEmissions": kg,
            }));
        }
    }
    raw_rows(json!(rows))
}

#[test]
fn test_raw_rows_skip_and_count() {
    let calc = EmissionsCalculator::from_raw(raw_rows(json!([
        {"metricId": "Electricity", "category": "purchased_electricity",
         "periodStart": "2024-01-01", "value": "1500.5", "unit": "kWh", "co2eEmissions": "600"},
        {"metricId": "Electricity", "category": "purchased_electricity",
         "periodStart": "2024-02-01", "value": "n/a", "unit": "kWh"},
        {"metricId": "Gas", "category": "Stationary Combustion", "scope": "scope_2",
         "periodStart": "2024-01-01", "value": 10, "unit": "m3"},
        {"metricId": "Water", "category": "waste_generated_in_operations",
         "periodStart": "not a date", "value": 3, "unit": "m3"},
    ])));

    let report = calc.report();
    assert_eq!(report.input_count, 4);
    assert_eq!(report.kept_count, 1);
    assert_eq!(report.skipped_count, 3);

    let summary = calc.summarize(&DateWindow::year(2024).unwrap(), &Default::default(), None);
    assert_eq!(summary.total_emissions, 0.6);
    assert_eq!(summary.skipped_count, 3);
    assert_eq!(summary.metrics["Electricity"].value, 1500.5);
}

#[test]
fn test_record_validation_errors_are_typed() {
    let record = MetricRecord::monthly(
        "Electricity",
        emissions_facade::Category::PurchasedElectricity,
        "2024-01".parse().unwrap(),
        f64::NAN,
        "kWh",
    );
    assert!(matches!(record.validate(), Err(RecordError::InvalidValue(_))));
}

#[test]
fn test_projection_with_seasonal_forecast() {
    let calc = EmissionsCalculator::from_raw(electricity_history());
    let forecast = |history: &[MonthlyPoint], months: usize| {
        let result = forecast_facade::forecast(history, months);
        assert_eq!(result.method, ForecastMethod::SeasonalTrend);
        result.forecasted_values
    };

    let projection = calc.projected_annual(2024, &forecast).unwrap();
    assert_eq!(projection.actual_months, 6);
    assert_eq!(projection.forecast_months, 6);
    assert_eq!(projection.ytd_actual, 6.2);
    // July and August carry the summer peak, so the rest of the year
    // exceeds six flat months
    assert!(projection.projected_remainder > 6.0);
    assert!(projection.projected_remainder < 7.0);
    let expected = projection.ytd_actual + projection.projected_remainder;
    assert!((projection.projected_total - expected).abs() < 1e-9);
}

#[test]
fn test_projection_before_any_actuals_targets_the_right_months() {
    // (100 + i) tonnes per month from 2021-07 through 2023-06
    let start: YearMonth = "2021-07".parse().unwrap();
    let records: Vec<MetricRecord> = (0..24)
        .map(|i| {
            let kg = (100.0 + i as f64) * 1000.0;
            let month = start.offset(i);
            MetricRecord::monthly("Gas", Category::StationaryCombustion, month, kg, "kWh")
                .with_emissions(kg)
        })
        .collect();
    let calc = EmissionsCalculator::new(records);

    let last_month = std::cell::Cell::new(None);
    let forecast = |history: &[MonthlyPoint], months: usize| {
        let result = forecast_facade::forecast(history, months);
        last_month.set(result.months.last().copied());
        result.forecasted_values
    };
    let projection = calc.projected_annual(2024, &forecast).unwrap();

    assert_eq!(last_month.get().map(|m| m.to_string()), Some("2024-12".to_string()));
    assert_eq!(projection.actual_months, 0);
    assert_eq!(projection.forecast_months, 12);
    // the trend continues to 130 t in January and 141 t in December
    let expected: f64 = (130..=141).map(f64::from).sum();
    assert!((projection.projected_total - expected).abs() < 0.1);
}

#[test]
fn test_monthly_aggregates_feed_forecast() {
    let calc = EmissionsCalculator::from_raw(electricity_history());
    let series = calc.monthly_aggregates(&DateWindow::year(2023).unwrap());
    assert_eq!(series.len(), 12);
    assert!((series[6].value - 1.2).abs() < 1e-12);

    let result = forecast_facade::forecast(&series, 3);
    assert_eq!(result.months[0].to_string(), "2024-01");
    assert!(result.forecasted_values.iter().all(|v| *v > 0.0));
}

#[test]
fn test_configured_progress_thresholds() {
    let config = AggregationConfig::from_json(
        r#"{"progress": {"onTrackPercent": 35, "atRiskPercent": 20}, "logSanitization": false}"#,
    )
    .unwrap();
    let calc = EmissionsCalculator::with_config(Vec::new(), config).unwrap();
    let target = ReductionTargetConfig::new(2023, 200.0, 2025, 12.5).unwrap();

    let progress = calc.target_progress(&target, 180.0).unwrap();
    assert_eq!(progress.progress_percent, Some(40.0));
    assert_eq!(progress.status, ProgressStatus::OnTrack);

    assert!(ProgressThresholds::new(50.0, 70.0).is_err());
}

#[test]
fn test_yoy_between_years() {
    let calc = EmissionsCalculator::from_raw(electricity_history());
    let half = |year: i32| {
        let first = YearMonth::new(year, 1).unwrap();
        DateWindow::months(first, first.offset(5)).unwrap()
    };
    let first_half_2023 = half(2023);
    let first_half_2024 = half(2024);
    let cmp = calc.yoy(
        calc.total_emissions(&first_half_2024),
        calc.total_emissions(&first_half_2023),
    );
    assert_eq!(cmp.percent_change, Some(0.0));
    assert_eq!(cmp.direction, emissions_facade::Direction::Flat);
}

#[test]
fn test_baseline_cache_is_per_request() {
    let calc = EmissionsCalculator::from_raw(electricity_history());
    let mut request_a = BaselineCache::new();
    let mut request_b = BaselineCache::new();

    let a = calc.baseline_emissions("org-a", 2023, &["Electricity"], &mut request_a).unwrap();
    let b = calc.baseline_emissions("org-a", 2023, &["Electricity"], &mut request_b).unwrap();
    assert_eq!(a, 12.6);
    assert_eq!(a, b);
    assert_eq!(request_a.misses(), 1);
    assert_eq!(request_b.misses(), 1);

    assert!(calc.baseline_emissions("org-a", 0, &[], &mut request_a).is_err());
}

#[test]
fn test_scope_breakdown_json_shape() {
    let calc = EmissionsCalculator::from_raw(electricity_history());
    let scopes = calc.scope_breakdown(&DateWindow::year(2023).unwrap());
    assert_eq!(scopes.get(Scope::Scope2), 12.6);
    let json = serde_json::to_value(scopes).unwrap();
    assert_eq!(json["scope_2"], 12.6);
    assert_eq!(json["total"], 12.6);
}
