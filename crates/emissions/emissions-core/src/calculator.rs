//! The aggregation engine.

use std::fmt;

use emissions_api::{AggregationConfig, ReductionTargetConfig};
use emissions_spi::units::tonnes_rounded;
use emissions_spi::{
    AggregateResult, AnnualProjection, Category, CategoryBreakdown, DateWindow, EmissionSource,
    EmissionsAggregator, IntensityDenominators, IntensityMetrics, MetricRecord, MetricValue,
    MonthlyForecastFn, MonthlyMeasure, RawMetricRecord, Recommender, Result, SanitizeReport, Scope,
    ScopeBreakdown, TargetProgress, YoyComparison,
};
use series_spi::MonthlyPoint;

use crate::cache::{BaselineCache, BaselineKey};
use crate::recommendations::StaticRecommendations;
use crate::sanitize::{sanitize, sanitize_raw, Sanitized};
use crate::{categories, comparison, intensity, metrics, monthly, totals};

/// Aggregates one organization's sanitized record set.
///
/// Construction runs deduplication and validation exactly once; every
/// aggregation afterwards is a pure read of the kept records.
pub struct EmissionsCalculator {
    records: Vec<MetricRecord>,
    report: SanitizeReport,
    config: AggregationConfig,
    recommender: Box<dyn Recommender>,
}

impl EmissionsCalculator {
    /// Build from typed records with the default configuration.
    pub fn new(records: impl IntoIterator<Item = MetricRecord>) -> Self {
        Self::from_sanitized(sanitize(records), AggregationConfig::default())
    }

    /// Build from loosely typed rows as supplied by storage.
    pub fn from_raw(raw: impl IntoIterator<Item = RawMetricRecord>) -> Self {
        Self::from_sanitized(sanitize_raw(raw), AggregationConfig::default())
    }

    /// Build with a custom configuration, rejecting invalid settings.
    pub fn with_config(
        records: impl IntoIterator<Item = MetricRecord>,
        config: AggregationConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_sanitized(sanitize(records), config))
    }

    /// Replace the recommendation table used by `top_emission_sources`.
    pub fn with_recommender(mut self, recommender: impl Recommender + 'static) -> Self {
        self.recommender = Box::new(recommender);
        self
    }

    fn from_sanitized(sanitized: Sanitized, config: AggregationConfig) -> Self {
        if config.log_sanitization {
            sanitized.log();
        }
        Self {
            records: sanitized.records,
            report: sanitized.report,
            config,
            recommender: Box::new(StaticRecommendations),
        }
    }

    /// What sanitization skipped and collapsed.
    pub fn report(&self) -> &SanitizeReport {
        &self.report
    }

    /// Kept records, ordered by `(metric, period start, site)`.
    pub fn records(&self) -> &[MetricRecord] {
        &self.records
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Native-unit values summed across all metrics, one decimal.
    pub fn total_value(&self, window: &DateWindow) -> f64 {
        totals::total_value(&self.records, window)
    }

    /// Monthly series of an explicit measure.
    pub fn monthly_aggregates_by(
        &self,
        window: &DateWindow,
        measure: MonthlyMeasure,
    ) -> Vec<MonthlyPoint> {
        monthly::monthly_aggregates_by(&self.records, window, measure)
    }

    /// Year-over-year delta using the configured flat threshold.
    pub fn yoy(&self, current: f64, previous: f64) -> YoyComparison {
        comparison::yoy_comparison(current, previous, self.config.yoy_flat_threshold_percent)
    }

    /// Progress of `projected_value` against a configured reduction target,
    /// bucketed with the configured thresholds.
    pub fn target_progress(
        &self,
        target: &ReductionTargetConfig,
        projected_value: f64,
    ) -> Result<TargetProgress> {
        target.validate()?;
        comparison::target_progress(
            target.baseline_value,
            target.target_value()?,
            projected_value,
            &self.config.progress,
        )
    }

    /// Baseline-year emissions of the selected metrics (all metrics when
    /// `metric_ids` is empty), memoized in a caller-owned cache.
    pub fn baseline_emissions(
        &self,
        organization_id: &str,
        year: i32,
        metric_ids: &[&str],
        cache: &mut BaselineCache,
    ) -> Result<f64> {
        let window = DateWindow::year(year)?;
        let key = BaselineKey::new(organization_id, year, metric_ids);
        Ok(cache.get_or_compute(key, || {
            let kg: f64 = totals::in_window(&self.records, &window)
                .filter(|r| metric_ids.is_empty() || metric_ids.contains(&r.metric_id.as_str()))
                .map(MetricRecord::emissions_kg)
                .sum();
            tonnes_rounded(kg)
        }))
    }

    /// Everything a dashboard summary card shows, in one pass over the window.
    /// `previous_total` enables the year-over-year comparison.
    pub fn summarize(
        &self,
        window: &DateWindow,
        denominators: &IntensityDenominators,
        previous_total: Option<f64>,
    ) -> AggregateResult {
        let total_emissions = self.total_emissions(window);
        AggregateResult {
            total_emissions,
            total_value: self.total_value(window),
            scope_breakdown: self.scope_breakdown(window),
            categories: self.category_breakdown(window),
            metrics: metrics::metrics_by_id(&self.records, window),
            intensity: self.intensity_metrics(window, denominators),
            yoy: previous_total.map(|previous| self.yoy(total_emissions, previous)),
            record_count: totals::in_window(&self.records, window).count(),
            skipped_count: self.report.skipped_count,
            duplicates_collapsed: self.report.duplicates_collapsed,
        }
    }
}

impl fmt::Debug for EmissionsCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionsCalculator")
            .field("records", &self.records.len())
            .field("report", &self.report)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl EmissionsAggregator for EmissionsCalculator {
    fn total_emissions(&self, window: &DateWindow) -> f64 {
        totals::total_emissions(&self.records, window)
    }

    fn scope_breakdown(&self, window: &DateWindow) -> ScopeBreakdown {
        totals::scope_breakdown(&self.records, window)
    }

    fn category_breakdown(&self, window: &DateWindow) -> Vec<CategoryBreakdown> {
        categories::category_breakdown(&self.records, window)
    }

    fn scope_category_breakdown(
        &self,
        scope: Scope,
        window: &DateWindow,
    ) -> Vec<CategoryBreakdown> {
        categories::scope_category_breakdown(&self.records, scope, window)
    }

    fn metric_value(&self, metric_id: &str, window: &DateWindow) -> Option<MetricValue> {
        metrics::metric_value(&self.records, metric_id, window)
    }

    fn category_metrics(&self, category: Category, window: &DateWindow) -> Vec<MetricValue> {
        metrics::category_metrics(&self.records, category, window)
    }

    fn top_metrics(&self, window: &DateWindow, limit: usize) -> Vec<MetricValue> {
        metrics::top_metrics(&self.records, window, limit)
    }

    fn intensity_metrics(
        &self,
        window: &DateWindow,
        denominators: &IntensityDenominators,
    ) -> IntensityMetrics {
        intensity::intensity_metrics(&self.records, window, denominators)
    }

    fn top_emission_sources(&self, window: &DateWindow, limit: usize) -> Vec<EmissionSource> {
        categories::top_emission_sources(&self.records, window, limit, self.recommender.as_ref())
    }

    fn monthly_aggregates(&self, window: &DateWindow) -> Vec<MonthlyPoint> {
        monthly::monthly_aggregates(&self.records, window)
    }

    fn projected_annual(
        &self,
        year: i32,
        forecast: MonthlyForecastFn<'_>,
    ) -> Result<AnnualProjection> {
        monthly::projected_annual(&self.records, year, forecast)
    }
}
