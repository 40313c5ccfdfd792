//! Trait for time series decomposition

use series_spi::MonthlyPoint;

use crate::error::Result;
use crate::model::DecompositionResult;

/// Splits a gap-free, ascending monthly series into trend, seasonal and
/// residual components.
pub trait Decomposer: Send + Sync {
    fn decompose(&self, series: &[MonthlyPoint]) -> Result<DecompositionResult>;
}
