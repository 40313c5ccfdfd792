//! Emissions Aggregation Service Provider Interface
//!
//! Defines the metric record model, the GHG scope/category taxonomy,
//! aggregation result types, error types and the aggregation contracts.

pub mod contract;
pub mod error;
pub mod model;
pub mod units;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;

pub use series_spi::{MonthlyPoint, SeriesError, YearMonth};
