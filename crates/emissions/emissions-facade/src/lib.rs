//! Emissions Facade
//!
//! Single entry point for the aggregation engine. Re-exports the record
//! model, configuration and calculator.

// Re-export everything from API (which includes the SPI prelude)
pub use emissions_api::*;

// Explicit re-exports for documentation
pub use emissions_api::prelude;

// Re-export core
pub use emissions_core::{
    sanitize, sanitize_raw, target_progress, yoy_comparison, BaselineCache, BaselineKey,
    EmissionsCalculator, Sanitized, StaticRecommendations,
};

// Re-export SPI model and traits
pub use emissions_spi::units;
pub use emissions_spi::{
    AggregateResult, AnnualProjection, Category, CategoryBreakdown, DateWindow, Direction,
    EmissionSource, EmissionsAggregator, IntensityDenominators, IntensityMetrics, MetricRecord,
    MetricValue, MonthlyForecastFn, MonthlyMeasure, MonthlyPoint, RawMetricRecord, RecordError,
    RecordKey, Recommender, SanitizeReport, Scope, ScopeBreakdown, SeriesError, TargetProgress,
    UnitClass, YearMonth, YoyComparison,
};
