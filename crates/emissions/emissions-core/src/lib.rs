//! Emissions Aggregation Core
//!
//! Turns metric records into the totals, breakdowns, intensity ratios,
//! monthly series and projections that sustainability dashboards display.
//!
//! Input records are sanitized once, when an [`EmissionsCalculator`] is
//! built: malformed rows are skipped and counted, and rows sharing a
//! `(metric, period start, site)` key are collapsed so nothing is counted twice.

mod cache;
mod calculator;
mod categories;
mod comparison;
mod intensity;
mod metrics;
mod monthly;
mod recommendations;
mod sanitize;
mod totals;

pub use cache::{BaselineCache, BaselineKey};
pub use calculator::EmissionsCalculator;
pub use comparison::{target_progress, yoy_comparison};
pub use recommendations::StaticRecommendations;
pub use sanitize::{sanitize, sanitize_raw, Sanitized};

// Re-export SPI traits for implementations
pub use emissions_spi::{EmissionsAggregator, EmissionsError, Recommender, Result};
