//! Emissions intensity ratios.

use serde::{Deserialize, Serialize};

/// Business denominators an organization may report.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityDenominators {
    #[serde(default)]
    pub employees: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub floor_area_sqm: Option<f64>,
}

impl IntensityDenominators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(mut self, employees: f64) -> Self {
        self.employees = Some(employees);
        self
    }

    pub fn revenue(mut self, revenue: f64) -> Self {
        self.revenue = Some(revenue);
        self
    }

    pub fn floor_area_sqm(mut self, area: f64) -> Self {
        self.floor_area_sqm = Some(area);
        self
    }
}

/// tCO2e per denominator. A ratio is absent when its denominator was not
/// supplied or was not positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_employee: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_sqm: Option<f64>,
}
