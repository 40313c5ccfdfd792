//! Monthly series and the annual projection.

use std::collections::BTreeMap;

use emissions_spi::units::{kg_to_tonnes, round1};
use emissions_spi::{
    AnnualProjection, DateWindow, MetricRecord, MonthlyForecastFn, MonthlyMeasure, Result,
    YearMonth,
};
use series_spi::MonthlyPoint;
use tracing::debug;

use crate::totals::in_window;

/// Emissions when any record in the set carries CO2e, raw values otherwise.
pub(crate) fn detect_measure<'a>(
    mut records: impl Iterator<Item = &'a MetricRecord>,
) -> MonthlyMeasure {
    if records.any(|r| r.co2e_emissions.is_some()) {
        MonthlyMeasure::Emissions
    } else {
        MonthlyMeasure::Value
    }
}

pub(crate) fn monthly_aggregates(
    records: &[MetricRecord],
    window: &DateWindow,
) -> Vec<MonthlyPoint> {
    let measure = detect_measure(in_window(records, window));
    monthly_aggregates_by(records, window, measure)
}

/// One point per month that has data, ascending. A record is bucketed by the
/// month its period starts in, clamped to the window's first month. Emissions
/// are unrounded tonnes.
pub(crate) fn monthly_aggregates_by(
    records: &[MetricRecord],
    window: &DateWindow,
    measure: MonthlyMeasure,
) -> Vec<MonthlyPoint> {
    let first = YearMonth::from_date(window.start());
    let mut buckets: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for record in in_window(records, window) {
        let amount = match measure {
            MonthlyMeasure::Emissions => kg_to_tonnes(record.emissions_kg()),
            MonthlyMeasure::Value => record.value,
        };
        *buckets.entry(record.month().max(first)).or_insert(0.0) += amount;
    }
    buckets
        .into_iter()
        .map(|(month, value)| MonthlyPoint::new(month, value))
        .collect()
}

pub(crate) fn projected_annual(
    records: &[MetricRecord],
    year: i32,
    forecast: MonthlyForecastFn<'_>,
) -> Result<AnnualProjection> {
    let year_window = DateWindow::year(year)?;
    let measure = detect_measure(
        records
            .iter()
            .filter(|r| r.period_start <= year_window.end()),
    );

    let actual = monthly_aggregates_by(records, &year_window, measure);
    let last_actual_month = actual.last().map(|p| p.month);
    let remaining = match last_actual_month {
        Some(month) => 12 - month.month() as usize,
        None => 12,
    };

    let forecast_values = if remaining == 0 {
        Vec::new()
    } else {
        // history never extends past the last actual month
        let history_end = match last_actual_month {
            Some(month) => month.last_day(),
            None => YearMonth::new(year, 1)?.pred().last_day(),
        };
        let history = match records.iter().map(|r| r.period_start).min() {
            Some(start) if start <= history_end => {
                monthly_aggregates_by(records, &DateWindow::new(start, history_end)?, measure)
            }
            _ => Vec::new(),
        };
        // forecast through December so the kept months are the year's last ones
        let december = YearMonth::new(year, 12)?;
        let horizon = match history.last() {
            Some(last) => last.month.months_until(&december).max(remaining as i64) as usize,
            None => remaining,
        };
        forecast(&history, horizon)
            .into_iter()
            .skip(horizon - remaining)
            .take(remaining)
            .map(|v| if v.is_finite() && v > 0.0 { v } else { 0.0 })
            .collect::<Vec<f64>>()
    };

    let ytd_actual = round1(actual.iter().map(|p| p.value).sum());
    let projected_remainder = round1(forecast_values.iter().sum());
    debug!(
        year,
        actual_months = actual.len(),
        forecast_months = remaining,
        ytd_actual,
        projected_remainder,
        "annual projection"
    );

    Ok(AnnualProjection {
        year,
        ytd_actual,
        projected_remainder,
        projected_total: ytd_actual + projected_remainder,
        last_actual_month,
        actual_months: actual.len(),
        forecast_months: remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use emissions_spi::{Category, EmissionsError};

    fn month(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn emission(m: &str, kg: f64) -> MetricRecord {
        MetricRecord::monthly("Electricity", Category::PurchasedElectricity, month(m), 100.0, "kWh")
            .with_emissions(kg)
    }

    fn water(m: &str, m3: f64) -> MetricRecord {
        MetricRecord::monthly("Water", Category::WasteGeneratedInOperations, month(m), m3, "m3")
    }

    #[test]
    fn test_monthly_aggregates_skip_empty_months() {
        let records = vec![
            emission("2024-01", 1000.0),
            emission("2024-03", 3000.0),
            emission("2024-03", 500.0).with_site("plant-2"),
        ];
        let points = monthly_aggregates(&records, &DateWindow::year(2024).unwrap());
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], MonthlyPoint::new(month("2024-01"), 1.0));
        assert_eq!(points[1], MonthlyPoint::new(month("2024-03"), 3.5));
    }

    #[test]
    fn test_monthly_aggregates_use_values_without_emissions() {
        let records = vec![water("2024-01", 40.0), water("2024-02", 35.0)];
        let points = monthly_aggregates(&records, &DateWindow::year(2024).unwrap());
        assert_eq!(points[1].value, 35.0);
    }

    #[test]
    fn test_monthly_aggregates_by_value() {
        let records = vec![emission("2024-01", 1000.0)];
        let points = monthly_aggregates_by(
            &records,
            &DateWindow::year(2024).unwrap(),
            MonthlyMeasure::Value,
        );
        assert_eq!(points[0].value, 100.0);
    }

    #[test]
    fn test_projection_passes_history_to_forecast() {
        let mut records = Vec::new();
        for m in ["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"] {
            records.push(emission(m, 10_000.0));
        }
        let seen = std::cell::RefCell::new((0usize, 0usize));
        let forecast = |history: &[MonthlyPoint], n: usize| {
            *seen.borrow_mut() = (history.len(), n);
            vec![10.0; n]
        };
        let projection = projected_annual(&records, 2024, &forecast).unwrap();
        assert_eq!(*seen.borrow(), (6, 9));
        assert_eq!(projection.ytd_actual, 30.0);
        assert_eq!(projection.projected_remainder, 90.0);
        assert_eq!(projection.projected_total, 120.0);
        assert_eq!(projection.last_actual_month, Some(month("2024-03")));
        assert_eq!(projection.actual_months, 3);
        assert_eq!(projection.forecast_months, 9);
    }

    #[test]
    fn test_projection_clamps_forecast() {
        let records = vec![emission("2024-10", 5000.0)];
        let forecast = |_: &[MonthlyPoint], _: usize| vec![-4.0, f64::NAN, 2.0, 99.0];
        let projection = projected_annual(&records, 2024, &forecast).unwrap();
        // only two months remain; the negative value becomes zero
        assert_eq!(projection.forecast_months, 2);
        assert_eq!(projection.projected_remainder, 0.0);
        assert_eq!(projection.projected_total, 5.0);
    }

    #[test]
    fn test_projection_without_current_year_data() {
        let records = vec![emission("2023-06", 2000.0)];
        let forecast = |history: &[MonthlyPoint], n: usize| vec![history[0].value; n];
        let projection = projected_annual(&records, 2024, &forecast).unwrap();
        assert_eq!(projection.ytd_actual, 0.0);
        assert_eq!(projection.forecast_months, 12);
        assert_eq!(projection.projected_total, 24.0);
    }

    #[test]
    fn test_projection_forecasts_through_december() {
        let records = vec![emission("2023-05", 1000.0), emission("2023-06", 2000.0)];
        let seen = std::cell::Cell::new(0usize);
        let forecast = |_: &[MonthlyPoint], n: usize| {
            seen.set(n);
            (1..=n).map(|h| h as f64).collect::<Vec<f64>>()
        };
        let projection = projected_annual(&records, 2024, &forecast).unwrap();
        // 2023-07 through 2024-12 is 18 months; only the last 12 belong to 2024
        assert_eq!(seen.get(), 18);
        assert_eq!(projection.forecast_months, 12);
        assert_eq!(projection.projected_remainder, (7..=18).sum::<usize>() as f64);
    }

    #[test]
    fn test_projection_complete_year_skips_forecast() {
        let records: Vec<MetricRecord> = month("2024-01")
            .through(month("2024-12"))
            .map(|m| emission(&m.to_string(), 1000.0))
            .collect();
        let forecast = |_: &[MonthlyPoint], _: usize| -> Vec<f64> { panic!("not called") };
        let projection = projected_annual(&records, 2024, &forecast).unwrap();
        assert_eq!(projection.projected_total, 12.0);
        assert_eq!(projection.forecast_months, 0);
    }

    #[test]
    fn test_projection_invalid_year() {
        let forecast = |_: &[MonthlyPoint], n: usize| vec![0.0; n];
        let err = projected_annual(&[], 0, &forecast).unwrap_err();
        assert!(matches!(err, EmissionsError::Series(_)));
    }
}
