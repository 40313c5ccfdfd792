//! Series error types.

use thiserror::Error;

/// Errors raised while building calendar-month series values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// A month label or month number could not be interpreted
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
