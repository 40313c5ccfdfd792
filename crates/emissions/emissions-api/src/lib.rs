//! Emissions Aggregation API
//!
//! Consumer configuration for the aggregation engine: year-over-year and
//! target-progress policy constants, and externally configured reduction targets.

mod config;

pub use config::*;

// Re-export SPI types
pub use emissions_spi::{EmissionsError, ProgressStatus, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AggregationConfig, ProgressThresholds, ReductionTargetConfig};
    pub use emissions_spi::{
        Category, DateWindow, EmissionsAggregator, EmissionsError, IntensityDenominators,
        MetricRecord, MonthlyPoint, RawMetricRecord, Result, Scope, YearMonth,
    };
}
