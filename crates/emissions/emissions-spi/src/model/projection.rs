//! Annual projection result type.

use serde::{Deserialize, Serialize};
use series_spi::YearMonth;

/// Actual year-to-date emissions plus a forecast for the months still to come.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualProjection {
    pub year: i32,
    /// tCO2e actually recorded, one decimal
    pub ytd_actual: f64,
    /// tCO2e forecast for the remaining months, one decimal
    pub projected_remainder: f64,
    /// `ytd_actual + projected_remainder`
    pub projected_total: f64,
    /// Last month of the year that has recorded data
    pub last_actual_month: Option<YearMonth>,
    pub actual_months: usize,
    pub forecast_months: usize,
}
