//! Forecast Core
//!
//! Gap filling, least-squares trend, calendar-month seasonal decomposition,
//! residual confidence bands and the forecaster that picks between them.

pub mod confidence;
pub mod decomposition;
pub mod forecaster;
pub mod grid;
pub mod stats;
pub mod trend;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, DecompositionResult, Decomposer,
    ForecastError, ForecastMethod, ForecastResult, MonthlyForecaster, Result, TrendFit,
};

// Re-export main types
pub use confidence::ResidualIntervalComputer;
pub use decomposition::{MonthOfYearDecomposer, TrendDecomposer};
pub use forecaster::{forecast, TrendSeasonalForecaster};
pub use grid::{reindex, Reindexed};
