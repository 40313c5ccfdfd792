//! Window filtering, totals and the scope breakdown.

use emissions_spi::units::{round1, tonnes_rounded};
use emissions_spi::{DateWindow, MetricRecord, Scope, ScopeBreakdown};

/// Records whose period overlaps the window.
pub(crate) fn in_window<'a>(
    records: &'a [MetricRecord],
    window: &'a DateWindow,
) -> impl Iterator<Item = &'a MetricRecord> + 'a {
    records.iter().filter(move |r| r.intersects(window))
}

/// Raw CO2e kilograms of records overlapping the window.
pub(crate) fn emissions_kg(records: &[MetricRecord], window: &DateWindow) -> f64 {
    in_window(records, window).map(MetricRecord::emissions_kg).sum()
}

pub(crate) fn total_emissions(records: &[MetricRecord], window: &DateWindow) -> f64 {
    tonnes_rounded(emissions_kg(records, window))
}

/// Native-unit values summed across all metrics, one decimal.
pub(crate) fn total_value(records: &[MetricRecord], window: &DateWindow) -> f64 {
    round1(in_window(records, window).map(|r| r.value).sum())
}

pub(crate) fn scope_breakdown(records: &[MetricRecord], window: &DateWindow) -> ScopeBreakdown {
    let mut kg = [0.0f64; 3];
    for record in in_window(records, window) {
        let slot = match record.scope {
            Scope::Scope1 => 0,
            Scope::Scope2 => 1,
            Scope::Scope3 => 2,
        };
        kg[slot] += record.emissions_kg();
    }

    let scope_1 = tonnes_rounded(kg[0]);
    let scope_2 = tonnes_rounded(kg[1]);
    let scope_3 = tonnes_rounded(kg[2]);
    ScopeBreakdown {
        scope_1,
        scope_2,
        scope_3,
        // sum of the rounded parts, never rounded again
        total: scope_1 + scope_2 + scope_3,
    }
}
