//! Year-end projection and target progress from raw metric rows
//!
//! Run with: RUST_LOG=warn cargo run --example annual_projection -p emissions-facade

use emissions_facade::{
    DateWindow, EmissionsAggregator, EmissionsCalculator, IntensityDenominators, MonthlyPoint,
    RawMetricRecord, ReductionTargetConfig, Scope,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Rows as storage hands them over: loosely typed, with one duplicate
    let mut rows = Vec::new();
    for year in [2023, 2024] {
        let last_month = if year == 2023 { 12 } else { 7 };
        for month in 1..=last_month {
            let summer = (6..=8).contains(&month);
            let kwh = if summer { 52_000.0 } else { 40_000.0 };
            rows.push(serde_json::json!({
                "metricId": "Electricity",
                "category": "purchased_electricity",
                "periodStart": format!("{year}-{month:02}-01"),
                "value": kwh,
                "unit": "kWh",
                "co2eEmissions": kwh * 0.35,
            }));
            rows.push(serde_json::json!({
                "metricId": "Natural Gas",
                "category": "Stationary Combustion",
                "periodStart": format!("{year}-{month:02}"),
                "value": if summer { "900" } else { "3100" },
                "unit": "m3",
                "co2eEmissions": if summer { 1_800.0 } else { 6_200.0 },
            }));
        }
    }
    rows.push(rows[0].clone());
    rows.push(serde_json::json!({
        "metricId": "Broken",
        "category": "nope",
        "periodStart": "?",
        "value": "n/a",
    }));

    let raw: Vec<RawMetricRecord> = rows
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<_, _>>()?;
    let calculator = EmissionsCalculator::from_raw(raw);
    println!("sanitized: {:?}", calculator.report());

    let baseline_window = DateWindow::year(2023)?;
    let summary = calculator.summarize(
        &baseline_window,
        &IntensityDenominators::new().employees(120.0).floor_area_sqm(4_500.0),
        None,
    );
    println!("2023 total: {} tCO2e", summary.total_emissions);
    println!("2023 by scope: {:?}", summary.scope_breakdown);

    let coverage = calculator.scope_category_breakdown(Scope::Scope3, &baseline_window);
    let untracked = coverage.iter().filter(|c| c.record_count == 0).count();
    println!("scope 3 categories without data: {untracked} of {}", coverage.len());

    let forecast = |history: &[MonthlyPoint], months: usize| {
        forecast_facade::forecast(history, months).forecasted_values
    };
    let projection = calculator.projected_annual(2024, &forecast)?;
    println!(
        "2024: {} actual + {} forecast = {} tCO2e",
        projection.ytd_actual, projection.projected_remainder, projection.projected_total
    );

    let target = ReductionTargetConfig::new(2023, summary.total_emissions, 2030, 4.2)?;
    let progress = calculator.target_progress(&target, projection.projected_total)?;
    println!(
        "progress towards {} tCO2e by 2030: {:?}% ({})",
        progress.target_value, progress.progress_percent, progress.status
    );

    for source in calculator.top_emission_sources(&DateWindow::year(2024)?, 2) {
        println!("  {} {}: {}", source.category, source.emissions, source.recommendation);
    }

    Ok(())
}
