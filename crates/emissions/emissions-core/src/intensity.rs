//! Intensity ratios.

use emissions_spi::units::kg_to_tonnes;
use emissions_spi::{DateWindow, IntensityDenominators, IntensityMetrics, MetricRecord};

use crate::totals::emissions_kg;

fn ratio(tonnes: f64, denominator: Option<f64>) -> Option<f64> {
    denominator
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| tonnes / d)
}

/// Emissions in tonnes divided by each positive denominator. Ratios are
/// computed from unrounded tonnes and left unrounded.
pub(crate) fn intensity_metrics(
    records: &[MetricRecord],
    window: &DateWindow,
    denominators: &IntensityDenominators,
) -> IntensityMetrics {
    let tonnes = kg_to_tonnes(emissions_kg(records, window));
    IntensityMetrics {
        per_employee: ratio(tonnes, denominators.employees),
        per_revenue: ratio(tonnes, denominators.revenue),
        per_sqm: ratio(tonnes, denominators.floor_area_sqm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emissions_spi::{Category, YearMonth};

    fn records() -> Vec<MetricRecord> {
        let jan: YearMonth = "2024-01".parse().unwrap();
        vec![
            MetricRecord::monthly("Electricity", Category::PurchasedElectricity, jan, 1.0, "kWh")
                .with_emissions(50_000.0),
        ]
    }

    fn window() -> DateWindow {
        DateWindow::year(2024).unwrap()
    }

    #[test]
    fn test_intensity_ratios() {
        let denominators = IntensityDenominators::new()
            .employees(100.0)
            .revenue(2_000_000.0)
            .floor_area_sqm(500.0);
        let metrics = intensity_metrics(&records(), &window(), &denominators);
        assert_eq!(metrics.per_employee, Some(0.5));
        assert_eq!(metrics.per_sqm, Some(0.1));
        assert!((metrics.per_revenue.unwrap() - 0.000025).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_is_omitted() {
        let denominators = IntensityDenominators::new().employees(0.0).revenue(f64::NAN);
        let metrics = intensity_metrics(&records(), &window(), &denominators);
        assert_eq!(metrics.per_employee, None);
        assert_eq!(metrics.per_revenue, None);
        assert_eq!(metrics.per_sqm, None);
    }

    #[test]
    fn test_omitted_fields_not_serialized() {
        let denominators = IntensityDenominators::new().employees(0.0).floor_area_sqm(10.0);
        let metrics = intensity_metrics(&records(), &window(), &denominators);
        let json = serde_json::to_value(metrics).unwrap();
        assert!(json.get("perEmployee").is_none());
        assert_eq!(json["perSqm"], 5.0);
    }
}
