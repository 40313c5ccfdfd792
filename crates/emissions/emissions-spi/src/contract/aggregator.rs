//! Aggregation engine trait.

use series_spi::MonthlyPoint;

use crate::error::Result;
use crate::model::{
    AnnualProjection, Category, CategoryBreakdown, DateWindow, EmissionSource,
    IntensityDenominators, IntensityMetrics, MetricValue, Scope, ScopeBreakdown,
};

/// Forecast hook used by [`EmissionsAggregator::projected_annual`]: given the
/// history up to the last actual month, return one value per requested month.
pub type MonthlyForecastFn<'a> = &'a dyn Fn(&[MonthlyPoint], usize) -> Vec<f64>;

/// Aggregations over an already sanitized record set.
///
/// Every method is a pure function of the record set and its arguments.
/// Emissions figures are tCO2e rounded to one decimal.
pub trait EmissionsAggregator: Send + Sync {
    /// Total emissions of records intersecting the window.
    fn total_emissions(&self, window: &DateWindow) -> f64;

    /// Per-scope totals whose parts sum exactly to the total.
    fn scope_breakdown(&self, window: &DateWindow) -> ScopeBreakdown;

    /// Categories that have records, largest first.
    fn category_breakdown(&self, window: &DateWindow) -> Vec<CategoryBreakdown>;

    /// Every category of `scope`, including those without any records.
    fn scope_category_breakdown(&self, scope: Scope, window: &DateWindow) -> Vec<CategoryBreakdown>;

    /// Sum of one metric, `None` if it has no records in the window.
    fn metric_value(&self, metric_id: &str, window: &DateWindow) -> Option<MetricValue>;

    /// Metrics of one category, largest emitter first.
    fn category_metrics(&self, category: Category, window: &DateWindow) -> Vec<MetricValue>;

    /// The `limit` largest emitting metrics across all categories.
    fn top_metrics(&self, window: &DateWindow, limit: usize) -> Vec<MetricValue>;

    /// Emissions per business denominator.
    fn intensity_metrics(
        &self,
        window: &DateWindow,
        denominators: &IntensityDenominators,
    ) -> IntensityMetrics;

    /// The `limit` largest emitting categories with a reduction suggestion.
    fn top_emission_sources(&self, window: &DateWindow, limit: usize) -> Vec<EmissionSource>;

    /// One point per calendar month present in the data.
    fn monthly_aggregates(&self, window: &DateWindow) -> Vec<MonthlyPoint>;

    /// Year-to-date actuals plus a forecast for the rest of `year`.
    fn projected_annual(&self, year: i32, forecast: MonthlyForecastFn<'_>)
        -> Result<AnnualProjection>;
}
