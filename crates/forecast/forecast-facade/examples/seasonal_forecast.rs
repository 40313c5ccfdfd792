//! Forecast the rest of a year from a seasonal monthly series
//!
//! Run with: RUST_LOG=debug cargo run --example seasonal_forecast -p forecast-facade

use forecast_facade::{forecast, MonthlyPoint, YearMonth};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Two and a half years of electricity emissions with a cooling peak
    let first: YearMonth = "2022-01".parse()?;
    let history: Vec<MonthlyPoint> = (0..30)
        .map(|i| {
            let month = first.offset(i);
            let cooling = if (6..=8).contains(&month.month()) { 25.0 } else { 0.0 };
            MonthlyPoint::new(month, 80.0 + 0.4 * i as f64 + cooling)
        })
        .collect();

    let result = forecast(&history, 6);

    println!("method: {}", result.method);
    println!(
        "trend: {:+.2} t/month, R² {:.3}",
        result.diagnostics.slope,
        result.diagnostics.r_squared.unwrap_or(0.0)
    );
    for (i, month) in result.months.iter().enumerate() {
        println!(
            "  {}  {:>7.1}  [{:>7.1}, {:>7.1}]",
            month, result.forecasted_values[i], result.lower[i], result.upper[i]
        );
    }
    if result.low_confidence {
        println!("low-confidence forecast");
    }

    Ok(())
}
