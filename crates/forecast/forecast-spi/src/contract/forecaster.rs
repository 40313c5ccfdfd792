//! Trait for monthly forecasting

use series_spi::MonthlyPoint;

use crate::model::ForecastResult;

/// Extends a monthly series by `months_ahead` months.
///
/// Implementations accept any input: unsorted, gappy, empty, or constant
/// series are handled by falling back to simpler methods, never by failing.
pub trait MonthlyForecaster: Send + Sync {
    fn forecast(&self, series: &[MonthlyPoint], months_ahead: usize) -> ForecastResult;
}
