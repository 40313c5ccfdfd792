//! Category breakdowns and top emission sources.

use std::collections::BTreeMap;

use emissions_spi::units::{percent_of, tonnes_rounded};
use emissions_spi::{
    Category, CategoryBreakdown, DateWindow, EmissionSource, MetricRecord, Recommender, Scope,
};

use crate::totals::in_window;

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    kg: f64,
    count: usize,
}

fn tally_by_category<'a>(
    records: impl Iterator<Item = &'a MetricRecord>,
) -> BTreeMap<Category, Tally> {
    let mut tallies: BTreeMap<Category, Tally> = BTreeMap::new();
    for record in records {
        let tally = tallies.entry(record.category).or_default();
        tally.kg += record.emissions_kg();
        tally.count += 1;
    }
    tallies
}

/// Build entries and sort them largest first. The sort is stable, so ties
/// keep GHG Protocol category order. Percentages come from unrounded kg,
/// not from the displayed tonnes.
fn entries(tallies: Vec<(Category, Tally)>, total_kg: f64) -> Vec<CategoryBreakdown> {
    let mut ranked = tallies;
    ranked.sort_by(|(_, a), (_, b)| b.kg.total_cmp(&a.kg));
    ranked
        .into_iter()
        .map(|(category, tally)| CategoryBreakdown {
            category,
            scope: category.scope(),
            emissions: tonnes_rounded(tally.kg),
            percentage: percent_of(tally.kg, total_kg),
            record_count: tally.count,
        })
        .collect()
}

pub(crate) fn category_breakdown(
    records: &[MetricRecord],
    window: &DateWindow,
) -> Vec<CategoryBreakdown> {
    let tallies = tally_by_category(in_window(records, window));
    let total_kg: f64 = tallies.values().map(|t| t.kg).sum();
    entries(tallies.into_iter().collect(), total_kg)
}

pub(crate) fn scope_category_breakdown(
    records: &[MetricRecord],
    scope: Scope,
    window: &DateWindow,
) -> Vec<CategoryBreakdown> {
    let tallies = tally_by_category(in_window(records, window).filter(|r| r.scope == scope));
    let total_kg: f64 = tallies.values().map(|t| t.kg).sum();
    let full: Vec<(Category, Tally)> = scope
        .categories()
        .iter()
        .map(|c| (*c, tallies.get(c).copied().unwrap_or_default()))
        .collect();
    entries(full, total_kg)
}

pub(crate) fn top_emission_sources(
    records: &[MetricRecord],
    window: &DateWindow,
    limit: usize,
    recommender: &dyn Recommender,
) -> Vec<EmissionSource> {
    category_breakdown(records, window)
        .into_iter()
        .take(limit)
        .map(|entry| EmissionSource {
            category: entry.category,
            scope: entry.scope,
            emissions: entry.emissions,
            percentage: entry.percentage,
            record_count: entry.record_count,
            recommendation: recommender.recommendation(entry.category).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendations::StaticRecommendations;
    use emissions_spi::YearMonth;

    fn month(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn record(metric: &str, category: Category, kg: f64) -> MetricRecord {
        MetricRecord::monthly(metric, category, month("2024-01"), 1.0, "kWh").with_emissions(kg)
    }

    fn sample() -> Vec<MetricRecord> {
        vec![
            record("Electricity", Category::PurchasedElectricity, 6000.0),
            record("Gas", Category::StationaryCombustion, 1000.0),
            record("Flights", Category::BusinessTravel, 2000.0),
            record("Trains", Category::BusinessTravel, 1000.0),
        ]
    }

    fn window() -> DateWindow {
        DateWindow::month(month("2024-01"))
    }

    #[test]
    fn test_category_breakdown_sorted_descending() {
        let breakdown = category_breakdown(&sample(), &window());
        let order: Vec<Category> = breakdown.iter().map(|e| e.category).collect();
        assert_eq!(
            order,
            vec![
                Category::PurchasedElectricity,
                Category::BusinessTravel,
                Category::StationaryCombustion
            ]
        );
        assert_eq!(breakdown[0].emissions, 6.0);
        assert_eq!(breakdown[0].percentage, 60.0);
        assert_eq!(breakdown[1].record_count, 2);
        assert_eq!(breakdown[1].percentage, 30.0);
    }

    #[test]
    fn test_category_breakdown_omits_untracked_categories() {
        let breakdown = category_breakdown(&sample(), &window());
        assert_eq!(breakdown.len(), 3);
    }

    #[test]
    fn test_percentages_use_unrounded_emissions() {
        let records = vec![
            record("Electricity", Category::PurchasedElectricity, 40.0),
            record("Gas", Category::StationaryCombustion, 60.0),
        ];
        let breakdown = category_breakdown(&records, &window());
        assert_eq!(breakdown[0].category, Category::StationaryCombustion);
        assert_eq!(breakdown[0].emissions, 0.1);
        assert_eq!(breakdown[0].percentage, 60.0);
        assert_eq!(breakdown[1].emissions, 0.0);
        assert_eq!(breakdown[1].percentage, 40.0);
    }

    #[test]
    fn test_scope3_coverage_always_fifteen() {
        let breakdown = scope_category_breakdown(&sample(), Scope::Scope3, &window());
        assert_eq!(breakdown.len(), 15);
        assert_eq!(breakdown[0].category, Category::BusinessTravel);
        assert_eq!(breakdown[0].percentage, 100.0);
        assert!(breakdown[1..].iter().all(|e| e.emissions == 0.0 && e.record_count == 0));

        let empty = scope_category_breakdown(&[], Scope::Scope3, &window());
        assert_eq!(empty.len(), 15);
        assert!(empty.iter().all(|e| e.percentage == 0.0));
        // untracked categories keep GHG Protocol order
        assert_eq!(empty[0].category, Category::PurchasedGoodsAndServices);
        assert_eq!(empty[14].category, Category::Investments);
    }

    #[test]
    fn test_scope_coverage_only_counts_its_scope() {
        let breakdown = scope_category_breakdown(&sample(), Scope::Scope1, &window());
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].category, Category::StationaryCombustion);
        assert_eq!(breakdown[0].percentage, 100.0);
    }

    #[test]
    fn test_top_emission_sources_carry_recommendations() {
        let sources = top_emission_sources(&sample(), &window(), 2, &StaticRecommendations);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].category, Category::PurchasedElectricity);
        assert_eq!(
            sources[0].recommendation,
            StaticRecommendations.recommendation(Category::PurchasedElectricity)
        );
        assert!(!sources[1].recommendation.is_empty());
    }

    #[test]
    fn test_top_emission_sources_zero_limit() {
        assert!(top_emission_sources(&sample(), &window(), 0, &StaticRecommendations).is_empty());
    }
}
