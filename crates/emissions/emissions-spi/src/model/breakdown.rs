//! Breakdown result types.

use serde::{Deserialize, Serialize};

use crate::model::{Category, Scope};

/// Emissions per scope in tCO2e.
///
/// `total` is the sum of the three rounded parts, so the parts always add up
/// to the total exactly as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScopeBreakdown {
    pub scope_1: f64,
    pub scope_2: f64,
    pub scope_3: f64,
    pub total: f64,
}

impl ScopeBreakdown {
    pub fn get(&self, scope: Scope) -> f64 {
        match scope {
            Scope::Scope1 => self.scope_1,
            Scope::Scope2 => self.scope_2,
            Scope::Scope3 => self.scope_3,
        }
    }
}

/// Emissions of one category within a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: Category,
    pub scope: Scope,
    /// tCO2e, one decimal
    pub emissions: f64,
    /// Share of the breakdown total, one decimal
    pub percentage: f64,
    pub record_count: usize,
}

/// Summed value of one metric within a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub metric_id: String,
    /// Native-unit sum, rounded by unit class
    pub value: f64,
    pub unit: String,
    /// tCO2e, one decimal
    pub emissions: f64,
}

/// A category ranked among the largest emitters, with a canned suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionSource {
    pub category: Category,
    pub scope: Scope,
    pub emissions: f64,
    pub percentage: f64,
    pub record_count: usize,
    pub recommendation: String,
}

/// What a monthly series sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthlyMeasure {
    /// CO2e in tonnes; records without emissions contribute zero
    Emissions,
    /// Raw native-unit values
    Value,
}
