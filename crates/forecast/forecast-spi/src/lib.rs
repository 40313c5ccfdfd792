//! Forecast Service Provider Interface
//!
//! Defines the result model and the traits for decomposing a monthly series,
//! computing confidence bands and producing a monthly forecast.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ConfidenceIntervalComputer, Decomposer, MonthlyForecaster};
pub use error::{ForecastError, Result};
pub use model::{
    ConfidenceInterval, DecompositionResult, ForecastDiagnostics, ForecastMethod, ForecastResult,
    TrendFit,
};

pub use series_spi::{MonthlyPoint, YearMonth};
