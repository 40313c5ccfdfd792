//! Forecast Facade
//!
//! High-level API for monthly forecasting. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export everything from API (which includes the SPI model)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{confidence, decomposition, grid, stats, trend};

// Re-export core types at root
pub use forecast_core::{
    forecast, reindex, MonthOfYearDecomposer, Reindexed, ResidualIntervalComputer,
    TrendDecomposer, TrendSeasonalForecaster,
};
