//! Per-metric sums.

use std::collections::BTreeMap;

use emissions_spi::units::{round_for_unit, tonnes_rounded};
use emissions_spi::{Category, DateWindow, MetricRecord, MetricValue};

use crate::totals::in_window;

struct MetricSum {
    value: f64,
    kg: f64,
    unit: String,
}

impl MetricSum {
    fn into_metric(self, metric_id: String) -> (f64, MetricValue) {
        let value = MetricValue {
            value: round_for_unit(self.value, &self.unit),
            emissions: tonnes_rounded(self.kg),
            unit: self.unit,
            metric_id,
        };
        (self.kg, value)
    }
}

fn sum_by_metric<'a>(
    records: impl Iterator<Item = &'a MetricRecord>,
) -> BTreeMap<String, MetricSum> {
    let mut sums: BTreeMap<String, MetricSum> = BTreeMap::new();
    for record in records {
        let sum = sums.entry(record.metric_id.clone()).or_insert_with(|| MetricSum {
            value: 0.0,
            kg: 0.0,
            unit: String::new(),
        });
        sum.value += record.value;
        sum.kg += record.emissions_kg();
        if sum.unit.is_empty() {
            sum.unit.clone_from(&record.unit);
        }
    }
    sums
}

/// Largest emitter first; ties by metric id.
fn ranked<'a>(records: impl Iterator<Item = &'a MetricRecord>) -> Vec<MetricValue> {
    let mut metrics: Vec<(f64, MetricValue)> = sum_by_metric(records)
        .into_iter()
        .map(|(id, sum)| sum.into_metric(id))
        .collect();
    metrics.sort_by(|(a, ma), (b, mb)| {
        b.total_cmp(a)
            .then_with(|| ma.metric_id.cmp(&mb.metric_id))
    });
    metrics.into_iter().map(|(_, m)| m).collect()
}

pub(crate) fn metric_value(
    records: &[MetricRecord],
    metric_id: &str,
    window: &DateWindow,
) -> Option<MetricValue> {
    let matching = in_window(records, window).filter(|r| r.metric_id == metric_id);
    sum_by_metric(matching)
        .into_iter()
        .next()
        .map(|(id, sum)| sum.into_metric(id).1)
}

pub(crate) fn category_metrics(
    records: &[MetricRecord],
    category: Category,
    window: &DateWindow,
) -> Vec<MetricValue> {
    ranked(in_window(records, window).filter(|r| r.category == category))
}

pub(crate) fn top_metrics(
    records: &[MetricRecord],
    window: &DateWindow,
    limit: usize,
) -> Vec<MetricValue> {
    let mut metrics = ranked(in_window(records, window));
    metrics.truncate(limit);
    metrics
}

/// Every metric in the window keyed by id.
pub(crate) fn metrics_by_id(
    records: &[MetricRecord],
    window: &DateWindow,
) -> BTreeMap<String, MetricValue> {
    sum_by_metric(in_window(records, window))
        .into_iter()
        .map(|(id, sum)| {
            let (_, metric) = sum.into_metric(id.clone());
            (id, metric)
        })
        .collect()
}
