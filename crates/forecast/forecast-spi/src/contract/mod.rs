//! Contract module containing trait definitions for forecast operations

mod confidence_interval_computer;
mod decomposer;
mod forecaster;

pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use decomposer::Decomposer;
pub use forecaster::MonthlyForecaster;
