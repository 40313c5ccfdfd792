//! Full aggregation summary and sanitization report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{CategoryBreakdown, IntensityMetrics, MetricValue, ScopeBreakdown, YoyComparison};

/// What sanitization did to the input records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizeReport {
    pub input_count: usize,
    pub kept_count: usize,
    /// Malformed records dropped
    pub skipped_count: usize,
    /// Records dropped because a later record had the same key
    pub duplicates_collapsed: usize,
}

impl SanitizeReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_count == 0 && self.duplicates_collapsed == 0
    }
}

/// Every figure a dashboard needs for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// tCO2e, one decimal
    pub total_emissions: f64,
    /// Sum of native-unit values across metrics, one decimal
    pub total_value: f64,
    pub scope_breakdown: ScopeBreakdown,
    /// Sorted by emissions, largest first
    pub categories: Vec<CategoryBreakdown>,
    /// Keyed by metric id
    pub metrics: BTreeMap<String, MetricValue>,
    pub intensity: IntensityMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yoy: Option<YoyComparison>,
    pub record_count: usize,
    pub skipped_count: usize,
    pub duplicates_collapsed: usize,
}
