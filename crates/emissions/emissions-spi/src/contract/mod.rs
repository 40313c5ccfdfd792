//! Contract definitions for emissions aggregation.
//!
//! This module contains trait definitions that providers must implement.

mod aggregator;
mod recommender;

pub use aggregator::{EmissionsAggregator, MonthlyForecastFn};
pub use recommender::Recommender;
