//! Forecast Consumer API
//!
//! Consumer configuration for the forecast engine: the data gates that pick
//! a method, the flat fallback window and confidence band settings.

mod config;

pub use config::ForecastConfig;

// Re-export traits from SPI
pub use forecast_spi::{
    ConfidenceInterval, ConfidenceIntervalComputer, DecompositionResult, Decomposer,
    ForecastDiagnostics, ForecastError, ForecastMethod, ForecastResult, MonthlyForecaster,
    MonthlyPoint, Result, TrendFit, YearMonth,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ForecastConfig;
    pub use forecast_spi::{
        ForecastError, ForecastMethod, ForecastResult, MonthlyForecaster, MonthlyPoint, Result,
        YearMonth,
    };
}
